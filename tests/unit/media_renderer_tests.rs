/*!
 * Tests for the ffmpeg wrapper
 */

use std::fs;
use std::os::unix::fs::PermissionsExt;
use gifscribe::app_config::RenderConfig;
use gifscribe::errors::RenderError;
use gifscribe::media_renderer::{MediaRenderer, Renderer};
use crate::common;

#[test]
fn test_filter_ffmpeg_stderr_withBannerNoise_shouldKeepOnlyErrorLines() {
    let stderr = concat!(
        "ffmpeg version 6.0 Copyright (c) 2000-2023\n",
        "  built with gcc 12\n",
        "  configuration: --enable-gpl\n",
        "Input #0, mov,mp4,m4a, from 'video.mp4':\n",
        "  Metadata:\n",
        "  Duration: 00:00:10.00, start: 0.000000\n",
        "missing.srt: No such file or directory\n",
    );

    let filtered = MediaRenderer::filter_ffmpeg_stderr(stderr);
    assert_eq!(filtered, "missing.srt: No such file or directory");
}

#[test]
fn test_filter_ffmpeg_stderr_withIndentedBannerLines_shouldStripThem() {
    // The indented banner lines carry their leading spaces; they must be
    // filtered out too, not just the unindented ones
    let stderr = "  built with gcc 12\n  configuration: --enable-gpl\nConversion failed!\n";

    let filtered = MediaRenderer::filter_ffmpeg_stderr(stderr);
    assert_eq!(filtered, "Conversion failed!");
}

#[test]
fn test_filter_ffmpeg_stderr_withOnlyNoise_shouldReportUnknownError() {
    let stderr = "ffmpeg version 6.0\n  built with gcc 12\n\n";

    let filtered = MediaRenderer::filter_ffmpeg_stderr(stderr);
    assert!(filtered.contains("unknown ffmpeg error"));
}

#[tokio::test]
async fn test_extract_clip_withHungTool_shouldTimeOut() {
    let temp_dir = common::create_temp_dir().unwrap();

    // Stand-in ffmpeg that never finishes; kill_on_drop reaps it when the
    // timeout fires
    let stub = temp_dir.path().join("ffmpeg");
    fs::write(&stub, "#!/bin/sh\nsleep 60\n").unwrap();
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

    let old_path = std::env::var("PATH").unwrap_or_default();
    unsafe {
        std::env::set_var("PATH", format!("{}:{}", temp_dir.path().display(), old_path));
    }

    let render_config = RenderConfig {
        timeout_secs: 1,
        ..RenderConfig::default()
    };
    let renderer = MediaRenderer::new(render_config);

    let result = renderer
        .extract_clip(
            &temp_dir.path().join("in.mp4"),
            "00:00:00.000",
            1.0,
            &temp_dir.path().join("out.gif"),
        )
        .await;

    unsafe {
        std::env::set_var("PATH", old_path);
    }

    match result {
        Err(RenderError::Timeout { operation, timeout_secs }) => {
            assert_eq!(operation, "clip-extract");
            assert_eq!(timeout_secs, 1);
        }
        other => panic!("expected a timeout, got {:?}", other),
    }
}
