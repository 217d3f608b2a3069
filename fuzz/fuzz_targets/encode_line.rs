#![no_main]

use codec::{encode_line_into, EncodeOptions, LineLocationReference, LocationReferencePoint};
use libfuzzer_sys::fuzz_target;

const POINT_BYTES: usize = 24;

fn read_f64(chunk: &[u8], at: usize) -> f64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&chunk[at..at + 8]);
    f64::from_le_bytes(raw)
}

fn point(chunk: &[u8]) -> LocationReferencePoint {
    LocationReferencePoint::new(read_f64(chunk, 0), read_f64(chunk, 8))
        .frc(chunk[16])
        .fow(chunk[17])
        .bear(u16::from_le_bytes([chunk[18], chunk[19]]))
        .lfrcnp(chunk[20])
        .dnp(u32::from(u16::from_le_bytes([chunk[21], chunk[22]])) << (chunk[23] % 17))
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let poffs = f64::from(data[0]) / 255.0;
    let noffs = f64::from(data[1]) / 200.0;
    let points = data[2..]
        .chunks_exact(POINT_BYTES)
        .take(64)
        .map(point)
        .collect();
    let line = LineLocationReference::new(points)
        .with_poffs(poffs)
        .with_noffs(noffs);

    let lenient = line.encode();
    if let Ok(bytes) = &lenient {
        assert_eq!(bytes.len(), line.encoded_len());
        assert_eq!(bytes[0], wire::Status::line().raw());

        let mut buf = vec![0u8; bytes.len()];
        let written = encode_line_into(&line, &EncodeOptions::default(), &mut buf);
        assert_eq!(written, Ok(bytes.len()));
        assert_eq!(&buf, bytes);
    } else {
        assert!(line.points.len() < 2);
    }

    // Anything strict accepts must encode identically to the lenient path.
    if let Ok(bytes) = line.encode_with(&EncodeOptions::strict()) {
        assert_eq!(Ok(bytes), lenient);
    }
});
