//! Container encoder/decoder tests for libzia

use libzia::{
    info, Decoder, DenseBody, Encoder, FrameKind, Mode, Reader, SampleWidth, ZiaError, MAGIC,
};

fn sparse_spikes(len: usize) -> Vec<i16> {
    (0..len)
        .map(|i| {
            if (i / 40) % 3 == 0 {
                ((i as f32 * 0.2).sin() * 900.0) as i16
            } else {
                0
            }
        })
        .collect()
}

fn roundtrip_i16(signal: &[i16], mode: Mode) -> Vec<i16> {
    let data = Encoder::new(6)
        .with_mode(mode)
        .encode(signal)
        .expect("Encoding failed");
    Decoder::new().decode(&data).expect("Decoding failed")
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_markov_roundtrip_i16() {
    let signal = sparse_spikes(5000);
    assert_eq!(roundtrip_i16(&signal, Mode::Markov), signal);
}

#[test]
fn test_sparse_roundtrip_i16() {
    let signal = sparse_spikes(5000);
    assert_eq!(roundtrip_i16(&signal, Mode::MarkovSparse), signal);
}

#[test]
fn test_delta_roundtrip_i16() {
    let signal = sparse_spikes(777);
    assert_eq!(roundtrip_i16(&signal, Mode::Delta), signal);
}

#[test]
fn test_roundtrip_i32_all_modes() {
    let signal: Vec<i32> = (0..3000)
        .map(|i| if i % 500 < 100 { 0 } else { (i * i % 9973) - 5000 })
        .collect();
    for mode in [Mode::Markov, Mode::MarkovSparse, Mode::Delta] {
        let data = Encoder::new(4)
            .with_training_samples(500)
            .with_mode(mode)
            .encode(&signal)
            .unwrap();
        let decoded: Vec<i32> = Decoder::new().decode(&data).unwrap();
        assert_eq!(decoded, signal, "mode {:?}", mode);
    }
}

#[test]
fn test_sparse_all_zero_signal_stores_raw_dense() {
    let signal = vec![0i16; 64];
    let frame = Encoder::new(6).encode_sparse(&signal).unwrap();
    assert_eq!(frame.dense, DenseBody::Raw(vec![]));
    assert_eq!(roundtrip_i16(&signal, Mode::MarkovSparse), signal);
}

#[test]
fn test_sparse_short_dense_part() {
    let mut signal = vec![0i16; 30];
    signal.extend([4, -4, 4]);
    let frame = Encoder::new(6).encode_sparse(&signal).unwrap();
    assert_eq!(frame.dense, DenseBody::Raw(vec![4, -4, 4]));
    assert_eq!(roundtrip_i16(&signal, Mode::MarkovSparse), signal);
}

#[test]
fn test_delta_empty_signal() {
    assert!(roundtrip_i16(&[], Mode::Delta).is_empty());
}

// ============================================================================
// Container
// ============================================================================

#[test]
fn test_header_fields() {
    let signal = sparse_spikes(1200);
    let data = Encoder::new(6)
        .with_mode(Mode::MarkovSparse)
        .encode(&signal)
        .unwrap();

    assert_eq!(&data[..4], &MAGIC);
    let file = Reader::new().read(&data).unwrap();
    assert_eq!(file.header.width, SampleWidth::Bits16);
    assert_eq!(file.header.kind, FrameKind::MarkovSparse);
    assert_eq!(file.header.signal_len, 1200);
    assert_eq!(file.header.payload_size as usize, file.payload.len());
}

#[test]
fn test_info() {
    let signal: Vec<i32> = (0..1000).map(|i| i * 3).collect();
    let data = Encoder::new(3).encode(&signal).unwrap();
    let info = info(&data).unwrap();

    assert_eq!(info.version, "1.0");
    assert_eq!(info.sample_bits, 32);
    assert_eq!(info.kind, "markov");
    assert_eq!(info.signal_len, 1000);
    assert_eq!(info.file_size, data.len());
    assert!(info.crc_valid);
    assert!(info.compression_ratio > 1.0);
}

#[test]
fn test_decoder_info_matches_free_function() {
    let data = Encoder::new(3)
        .with_mode(Mode::Delta)
        .encode(&[4i16, 8, 15, 16, 23, 42])
        .unwrap();
    let info = Decoder::new().info(&data).unwrap();

    assert_eq!(info.kind, "delta");
    assert_eq!(info.signal_len, 6);
    assert_eq!(info.file_size, libzia::info(&data).unwrap().file_size);
}

#[test]
fn test_width_mismatch() {
    let data = Encoder::new(3).encode(&[1i16, 2, 3, 4]).unwrap();
    let err = Decoder::new().decode::<i32>(&data).unwrap_err();
    assert_eq!(
        err,
        ZiaError::WidthMismatch {
            expected: SampleWidth::Bits32,
            actual: SampleWidth::Bits16
        }
    );
}

#[test]
fn test_corrupted_payload() {
    let mut data = Encoder::new(3).encode(&[1i16, 5, 2, 8, 3]).unwrap();
    let last = data.len() - 1;
    data[last] ^= 0xff;

    let err = Decoder::new().decode::<i16>(&data).unwrap_err();
    assert!(matches!(err, ZiaError::ChecksumMismatch { .. }));
    assert!(!info(&data).unwrap().crc_valid);
}

#[test]
fn test_bad_magic() {
    let mut data = Encoder::new(3).encode(&[1i16, 5, 2, 8, 3]).unwrap();
    data[0] = b'X';
    assert!(matches!(
        Decoder::new().decode::<i16>(&data),
        Err(ZiaError::InvalidContainer(_))
    ));
}

#[test]
fn test_truncated_container() {
    let data = Encoder::new(3).encode(&[1i16, 5, 2, 8, 3]).unwrap();
    for cut in [0, 3, 10, data.len() - 1] {
        assert!(
            Decoder::new().decode::<i16>(&data[..cut]).is_err(),
            "cut at {}",
            cut
        );
    }
}

#[test]
fn test_markov_mode_rejects_short_signal() {
    let err = Encoder::new(6).encode(&[1i16, 2]).unwrap_err();
    assert_eq!(err, ZiaError::SignalTooShort { len: 2, order: 6 });
}

#[test]
fn test_sparse_mode_still_checks_order() {
    let err = Encoder::new(1)
        .with_mode(Mode::MarkovSparse)
        .encode(&[0i16; 20])
        .unwrap_err();
    assert_eq!(err, ZiaError::InvalidOrder { order: 1 });
}
