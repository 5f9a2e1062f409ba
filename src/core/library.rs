//! core/library.rs
//! Discover audio files under a folder.

use std::path::{Path, PathBuf};

/// Extensions (lowercase, no dot) treated as audio files.
///
/// Limited to what the ID3 backend tags in place. FLAC/Ogg/MP4 keep their metadata in
/// their own containers and are left alone.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3"];

pub fn scan_audio_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut out = Vec::new();
    walk_dir(root, recursive, &mut out)?;
    Ok(out)
}

fn walk_dir(dir: &Path, recursive: bool, out: &mut Vec<PathBuf>) -> Result<(), std::io::Error> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            if recursive {
                walk_dir(&path, recursive, out)?;
            }
        } else if is_audio(&path) {
            out.push(path);
        }
    }

    Ok(())
}

pub fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_respects_recursion_flag() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("disc 2");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(dir.path().join("a.mp3"), b"").unwrap();
        std::fs::write(dir.path().join("cover.jpg"), b"").unwrap();
        std::fs::write(dir.path().join("c.flac"), b"").unwrap();
        std::fs::write(sub.join("b.MP3"), b"").unwrap();

        let mut flat = scan_audio_files(dir.path(), false).unwrap();
        flat.sort();
        assert_eq!(flat, vec![dir.path().join("a.mp3")]);

        let mut deep = scan_audio_files(dir.path(), true).unwrap();
        deep.sort();
        assert_eq!(deep, vec![dir.path().join("a.mp3"), sub.join("b.MP3")]);
    }

    #[test]
    fn only_id3_containers_count_as_audio() {
        assert!(is_audio(Path::new("/m/a.mp3")));
        assert!(is_audio(Path::new("/m/a.Mp3")));
        for other in ["a.flac", "a.ogg", "a.m4a", "a.opus", "a.wav", "mp3"] {
            assert!(!is_audio(Path::new(other)), "{other}");
        }
    }
}
