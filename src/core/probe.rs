//! core/probe.rs
//! Read-only file stats: duration (Symphonia probe) and size.

use std::fs::File;
use std::path::Path;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;
use tracing::trace;

/// Duration of the default audio track in whole seconds, if the container says.
pub fn probe_duration(path: &Path) -> Option<u64> {
    let file = File::open(path).ok()?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = match symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    ) {
        Ok(p) => p,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "format probe failed");
            return None;
        }
    };

    let track = probed.format.default_track()?;
    let params = &track.codec_params;
    duration_from_params(params.time_base, params.n_frames)
}

fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<u64> {
    let tb = time_base?;
    let frames = n_frames?;

    let t = tb.calc_time(frames);
    // Round to the nearest second.
    Some(t.seconds + u64::from(t.frac >= 0.5))
}

/// File size in bytes (0 if the file cannot be stat'ed).
pub fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
