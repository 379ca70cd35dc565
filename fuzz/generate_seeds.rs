#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp8(width: usize, height: usize, fill: impl Fn(usize, usize) -> u8) -> Vec<u8> {
    let pad = (4 - width % 4) % 4;
    let size = 1078 + (width + pad) * height;
    let mut bmp = vec![0u8; 1078];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(size as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&1078u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&(width as i32).to_le_bytes());
    bmp[22..26].copy_from_slice(&(height as i32).to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&8u16.to_le_bytes()); // bpp
    for i in 0..256 {
        bmp[54 + i * 4..58 + i * 4].copy_from_slice(&[i as u8, i as u8, i as u8, 0]);
    }
    for y in 0..height {
        for x in 0..width {
            bmp.push(fill(x, y));
        }
        bmp.extend(std::iter::repeat_n(0u8, pad));
    }
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp8_1x1.bmp"), bmp8(1, 1, |_, _| 0)).unwrap();
    fs::write(format!("{dir}/bmp8_5x3_mark.bmp"), bmp8(5, 3, |x, y| (x == 2 && y == 1) as u8)).unwrap();
    fs::write(format!("{dir}/bmp8_4x4_corners.bmp"), bmp8(4, 4, |x, y| if x + y > 4 { 9 } else { 0 })).unwrap();
    fs::write(format!("{dir}/bmp8_7x2_ramp.bmp"), bmp8(7, 2, |x, y| (x * 30 + y) as u8)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut no_palette = bmp8(2, 2, |_, _| 1);
    no_palette.truncate(300);
    fs::write(format!("{dir}/bmp8_no_palette.bin"), no_palette).unwrap();

    println!("Generated seed corpus in {dir}/");
}
