//! Property test generators for path resolution
//!
//! Generators build relative paths over directories a test creates, with
//! noise the operating system is expected to canonicalize away.

use proptest::prelude::*;

/// Redundant spelling inserted after a path segment
#[derive(Debug, Clone, Copy)]
pub enum Noise {
    /// A single separator
    None,
    /// `/./`
    CurrentDir,
    /// `//`
    DoubleSlash,
    /// Step out to the parent and back into the same segment
    Reenter,
}

/// Generators for path resolution scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate a directory name that is neither `.` nor `..`
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,15}"
    }

    /// Generate a noise kind, favouring none
    pub fn noise() -> impl Strategy<Value = Noise> {
        prop_oneof![
            2 => Just(Noise::None),
            1 => Just(Noise::CurrentDir),
            1 => Just(Noise::DoubleSlash),
            1 => Just(Noise::Reenter),
        ]
    }

    /// Generate clean segments together with a noisy relative spelling of them
    ///
    /// Every `..` in the noisy form only climbs out of a segment that exists
    /// once the clean segments are created as directories.
    pub fn segments_with_noise() -> impl Strategy<Value = (Vec<String>, String)> {
        prop::collection::vec((Self::segment(), Self::noise()), 1..=4).prop_map(|parts| {
            let mut noisy = String::new();
            for (segment, noise) in &parts {
                noisy.push_str(segment);
                match noise {
                    Noise::None => noisy.push('/'),
                    Noise::CurrentDir => noisy.push_str("/./"),
                    Noise::DoubleSlash => noisy.push_str("//"),
                    Noise::Reenter => noisy.push_str(&format!("/../{}/", segment)),
                }
            }
            let segments = parts.into_iter().map(|(segment, _)| segment).collect();
            (segments, noisy)
        })
    }
}
