mod common;

use common::{noise, scratch_dir, solid};
use monocrop::files::{OutputPaths, RunRequest, grayscale_path, persist};
use monocrop::*;

#[test]
fn process_produces_all_outputs() {
    let data = noise(100, 60);
    let out = ProcessRequest::new(&data)
        .threshold(100)
        .origin(5, 5)
        .process()
        .unwrap();

    let source = decode_bmp(&data).unwrap();
    assert_eq!(out.source, source);
    assert_eq!(out.header(), &source.header);
    assert_eq!(out.grayscale, source.to_grayscale().unwrap());
    assert_eq!(out.grayscale_bytes().len(), data.len());

    let crop = out.crop.as_ref().unwrap();
    assert_eq!(crop, &source.crop_binarize(CropRegion::new(5, 5), 100).unwrap());

    let gray = source.to_grayscale().unwrap();
    assert_eq!(out.array.unwrap(), emit_array(&gray.pixels, 100).unwrap());
}

#[test]
fn crop_reads_colour_buffer_not_grayscale() {
    // Level 2 truncates to 1 on the first pass and to 0 on a second one.
    let data = solid(84, 48, [2, 2, 2]);
    let out = ProcessRequest::new(&data).threshold(0).process().unwrap();
    assert!(out.grayscale.pixels.iter().all(|&b| b == 1));
    assert!(out.crop.unwrap().pixels.iter().all(|&b| b == 255));
}

#[test]
fn array_source_selection() {
    let data = solid(100, 60, [0, 0, 255]);
    let original = ProcessRequest::new(&data)
        .threshold(50)
        .array_source(ArraySource::Original)
        .process()
        .unwrap();
    // Original bytes cycle 0x00,0x00,0xFF.
    assert!(original.array.unwrap().contains("\n0x00,0x00,0xFF,0x00,"));

    let gray = ProcessRequest::new(&data)
        .threshold(50)
        .array_source(ArraySource::Grayscale)
        .process()
        .unwrap();
    assert_eq!(gray.array.unwrap().matches("0x4C,").count(), ARRAY_LEN);

    let crop = ProcessRequest::new(&data)
        .threshold(50)
        .array_source(ArraySource::Crop)
        .process()
        .unwrap();
    assert_eq!(crop.array.unwrap().matches("0xFF,").count(), ARRAY_LEN);
}

#[test]
fn failed_crop_is_not_fatal() {
    let data = noise(100, 60);
    let out = ProcessRequest::new(&data).origin(-1, 0).process().unwrap();
    assert!(matches!(out.crop, Err(MonocropError::CropOutOfBounds { .. })));
    assert!(out.array.is_ok());
    assert_eq!(out.grayscale.pixels.len(), 100 * 60 * 3);

    let out = ProcessRequest::new(&data)
        .origin(17, 0)
        .array_source(ArraySource::Crop)
        .process()
        .unwrap();
    assert!(out.crop.is_err());
    assert!(matches!(out.array, Err(MonocropError::CropUnavailable)));
}

#[test]
fn small_image_array_fails_alone() {
    // 10x10 has 300 bytes of pixel data, fewer than the 504 the array needs.
    let data = solid(10, 10, [9, 9, 9]);
    let out = ProcessRequest::new(&data).process().unwrap();
    assert!(out.crop.is_err());
    assert!(matches!(
        out.array,
        Err(MonocropError::BufferTooSmall {
            needed: 504,
            actual: 300
        })
    ));
}

#[test]
fn format_error_is_fatal() {
    let mut data = noise(100, 60);
    data[1] = b'X';
    let err = ProcessRequest::new(&data).process().unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn limits_apply() {
    let data = noise(100, 60);
    let limits = Limits {
        max_width: Some(99),
        ..Default::default()
    };
    let err = ProcessRequest::new(&data).with_limits(&limits).process().unwrap_err();
    assert!(matches!(err, MonocropError::LimitExceeded(_)));
}

#[test]
fn custom_array_name() {
    let data = noise(100, 60);
    let out = ProcessRequest::new(&data)
        .array_encoder(ArrayEncoder::new().name("splash"))
        .process()
        .unwrap();
    assert!(out.array.unwrap().starts_with("unsigned char const splash[504] = {"));
}

// ── Files ────────────────────────────────────────────────────────────

#[test]
fn run_writes_three_artifacts() {
    let tmp = scratch_dir("run");
    let dir = tmp.path();
    let source = dir.join("scene.bmp");
    let data = noise(100, 60);
    std::fs::write(&source, &data).unwrap();

    let outputs = OutputPaths::for_source(&source).in_dir(dir);
    let report = RunRequest::new(&source)
        .threshold(70)
        .origin(1, 2)
        .outputs(outputs.clone())
        .run()
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.header.width, 100);
    assert_eq!(report.grayscale.as_ref().unwrap(), &dir.join("scene_gs.bmp"));
    assert_eq!(report.crop.as_ref().unwrap(), &dir.join("recorte.bmp"));
    assert_eq!(report.array.as_ref().unwrap(), &dir.join("imagem_vetor.h"));

    let expected = ProcessRequest::new(&data)
        .threshold(70)
        .origin(1, 2)
        .process()
        .unwrap();
    assert_eq!(std::fs::read(&outputs.grayscale).unwrap(), expected.grayscale_bytes());
    assert_eq!(
        std::fs::read(&outputs.crop).unwrap(),
        expected.crop.unwrap().encode()
    );
    assert_eq!(
        std::fs::read_to_string(&outputs.array).unwrap(),
        expected.array.unwrap()
    );
}

#[test]
fn run_continues_after_crop_failure() {
    let tmp = scratch_dir("run_oob");
    let dir = tmp.path();
    let source = dir.join("small.bmp");
    std::fs::write(&source, noise(90, 50)).unwrap();

    let outputs = OutputPaths::for_source(&source).in_dir(dir);
    let report = RunRequest::new(&source)
        .origin(50, 0)
        .outputs(outputs.clone())
        .run()
        .unwrap();

    assert!(!report.is_complete());
    assert!(report.grayscale.is_ok());
    assert!(report.crop.is_err());
    assert!(report.array.is_ok());
    assert!(!outputs.crop.exists());
}

#[test]
fn run_missing_source() {
    let tmp = scratch_dir("run_missing");
    let dir = tmp.path();
    let err = RunRequest::new(dir.join("nope.bmp")).run().unwrap_err();
    assert_eq!(err.class(), ErrorClass::Io);
}

#[test]
fn run_rejects_non_bmp_without_output() {
    let tmp = scratch_dir("run_bad");
    let dir = tmp.path();
    let source = dir.join("bad.bmp");
    std::fs::write(&source, b"not a bitmap at all").unwrap();
    let outputs = OutputPaths::for_source(&source).in_dir(dir);
    let err = RunRequest::new(&source)
        .outputs(outputs.clone())
        .run()
        .unwrap_err();
    assert!(err.is_fatal());
    assert!(!outputs.grayscale.exists());
    assert!(!outputs.array.exists());
}

#[test]
fn unwritable_output_reported_per_step() {
    let tmp = scratch_dir("run_unwritable");
    let dir = tmp.path();
    let source = dir.join("img.bmp");
    std::fs::write(&source, noise(100, 60)).unwrap();
    let mut outputs = OutputPaths::for_source(&source).in_dir(dir);
    outputs.crop = dir.join("missing_subdir").join("recorte.bmp");

    let report = RunRequest::new(&source).outputs(outputs.clone()).run().unwrap();
    assert!(report.grayscale.is_ok());
    assert!(matches!(report.crop, Err(MonocropError::Io { .. })));
    assert!(report.array.is_ok());
    assert!(!outputs.crop.exists());
}

#[test]
fn persist_replaces_atomically() {
    let tmp = scratch_dir("persist");
    let dir = tmp.path();
    let path = dir.join("out.bin");
    persist(&path, b"first").unwrap();
    persist(&path, b"second").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"second");
    let leftovers: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn persist_failure_leaves_nothing_behind() {
    let tmp = scratch_dir("persist_fail");
    let dir = tmp.path();
    // A non-empty directory sits at the target name, so the final rename fails.
    let path = dir.join("out.bin");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), b"x").unwrap();

    let err = persist(&path, b"payload").unwrap_err();
    assert!(matches!(err, MonocropError::Io { .. }));
    assert_eq!(err.class(), ErrorClass::Io);
    assert!(!dir.join(".out.bin.partial").exists());
    assert!(path.is_dir());

    let entries: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("out.bin")]);
}

#[test]
fn default_grayscale_name() {
    assert_eq!(
        grayscale_path(std::path::Path::new("dir/cat.bmp")),
        std::path::Path::new("dir").join("cat_gs.bmp")
    );
}
