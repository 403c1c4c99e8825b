use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn wavetape_bin() -> &'static str {
    env!("CARGO_BIN_EXE_wavetape")
}

fn tmp_path(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    fs::create_dir_all(&dir).ok();
    dir.join(name)
}

fn run_wavetape(args: &[&str]) -> std::process::Output {
    Command::new(wavetape_bin())
        .args(args)
        .output()
        .expect("failed to execute wavetape")
}

#[test]
fn test_encode_decode_roundtrip() {
    let input = tmp_path("roundtrip.txt");
    fs::write(&input, "tape roundtrip message").unwrap();
    let wav = tmp_path("roundtrip.wav");
    let base = tmp_path("roundtrip_out");

    let output = run_wavetape(&["encode", input.to_str().unwrap(), wav.to_str().unwrap()]);
    assert!(output.status.success(), "encode failed: {:?}", output);
    assert!(wav.exists(), "WAV file was not created");

    let output = run_wavetape(&["decode", wav.to_str().unwrap(), base.to_str().unwrap()]);
    assert!(output.status.success(), "decode failed: {:?}", output);

    // The recovered extension is appended to the output base name
    let recovered = tmp_path("roundtrip_out.txt");
    assert!(recovered.exists(), "decoded file was not created");
    assert_eq!(fs::read(&recovered).unwrap(), b"tape roundtrip message");
}

#[test]
fn test_protected_roundtrip() {
    let input = tmp_path("protected.bin");
    fs::write(&input, [0u8, 1, 2, 254, 255, 0x5A]).unwrap();
    let wav = tmp_path("protected.wav");
    let base = tmp_path("protected_out");

    let output = run_wavetape(&[
        "encode",
        input.to_str().unwrap(),
        wav.to_str().unwrap(),
        "--protected",
    ]);
    assert!(output.status.success(), "encode failed: {:?}", output);

    let output = run_wavetape(&[
        "decode",
        wav.to_str().unwrap(),
        base.to_str().unwrap(),
        "--protected",
    ]);
    assert!(output.status.success(), "decode failed: {:?}", output);

    let recovered = tmp_path("protected_out.bin");
    assert_eq!(fs::read(&recovered).unwrap(), vec![0u8, 1, 2, 254, 255, 0x5A]);
}

#[test]
fn test_custom_speed_roundtrip() {
    let input = tmp_path("speed.txt");
    fs::write(&input, "slow but steady").unwrap();
    let wav = tmp_path("speed.wav");
    let base = tmp_path("speed_out");

    let output = run_wavetape(&[
        "encode",
        input.to_str().unwrap(),
        wav.to_str().unwrap(),
        "--speed",
        "1000",
    ]);
    assert!(output.status.success(), "encode failed: {:?}", output);

    let output = run_wavetape(&[
        "decode",
        wav.to_str().unwrap(),
        base.to_str().unwrap(),
        "--speed",
        "1000",
    ]);
    assert!(output.status.success(), "decode failed: {:?}", output);

    let recovered = tmp_path("speed_out.txt");
    assert_eq!(fs::read(&recovered).unwrap(), b"slow but steady");
}

#[test]
fn test_missing_input_is_an_error() {
    let wav = tmp_path("never_written.wav");
    let output = run_wavetape(&["encode", "does_not_exist.bin", wav.to_str().unwrap()]);
    assert!(
        !output.status.success(),
        "encoding a missing file must fail, not silently no-op"
    );
}

#[test]
fn test_sample_rate_mismatch_rejected() {
    // A WAV at the wrong sample rate is rejected outright, no partial
    // output.
    let wav = tmp_path("wrong_rate.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 22050,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&wav, spec).unwrap();
    for i in 0..4410 {
        let t = i as f32 / 22050.0;
        let sample = (2.0 * std::f32::consts::PI * 1000.0 * t).sin();
        writer.write_sample((sample * 32767.0) as i16).unwrap();
    }
    writer.finalize().unwrap();

    let base = tmp_path("wrong_rate_out");
    let output = run_wavetape(&["decode", wav.to_str().unwrap(), base.to_str().unwrap()]);
    assert!(!output.status.success(), "mismatched sample rate must be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SampleRateMismatch"),
        "unexpected error output: {}",
        stderr
    );
}

#[test]
fn test_decode_without_extension_writes_base_name() {
    // A file with no extension round-trips to the bare base name
    let input = tmp_path("noext");
    fs::write(&input, "extensionless").unwrap();
    let wav = tmp_path("noext.wav");
    let base = tmp_path("noext_out");

    let output = run_wavetape(&["encode", input.to_str().unwrap(), wav.to_str().unwrap()]);
    assert!(output.status.success(), "encode failed: {:?}", output);

    let output = run_wavetape(&["decode", wav.to_str().unwrap(), base.to_str().unwrap()]);
    assert!(output.status.success(), "decode failed: {:?}", output);

    assert_eq!(fs::read(&base).unwrap(), b"extensionless");
}
