// Adapter Pattern - one playback interface over incompatible players.
// The client only knows `MediaPlayer`; `MediaAdapter` translates its calls
// into the `AdvancedMediaPlayer` interface the VLC and MP4 players expose.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::PatternError;

// ============================================================================
// Formats
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Mp3,
    Vlc,
    Mp4,
}

impl FromStr for MediaFormat {
    type Err = PatternError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "mp3" => Ok(Self::Mp3),
            "vlc" => Ok(Self::Vlc),
            "mp4" => Ok(Self::Mp4),
            _ => Err(PatternError::UnsupportedFormat(tag.to_string())),
        }
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self {
            Self::Mp3 => "mp3",
            Self::Vlc => "vlc",
            Self::Mp4 => "mp4",
        };
        f.write_str(tag)
    }
}

// ============================================================================
// Target and adaptee interfaces
// ============================================================================

/// The interface client code plays media through.
pub trait MediaPlayer {
    /// Plays `file_name` and returns the line written to the console.
    fn play(&self, audio_type: &str, file_name: &str) -> String;
}

/// The incompatible interface of the format-specific players.
pub trait AdvancedMediaPlayer {
    fn play_vlc(&self, file_name: &str) -> String;
    fn play_mp4(&self, file_name: &str) -> String;
}

pub struct VlcPlayer;

impl AdvancedMediaPlayer for VlcPlayer {
    fn play_vlc(&self, file_name: &str) -> String {
        format!("Playing vlc file. Name: {}", file_name)
    }

    fn play_mp4(&self, _file_name: &str) -> String {
        String::new()
    }
}

pub struct Mp4Player;

impl AdvancedMediaPlayer for Mp4Player {
    fn play_vlc(&self, _file_name: &str) -> String {
        String::new()
    }

    fn play_mp4(&self, file_name: &str) -> String {
        format!("Playing mp4 file. Name: {}", file_name)
    }
}

// ============================================================================
// Adapter
// ============================================================================

type AdvancedPlay = fn(&dyn AdvancedMediaPlayer, &str) -> String;

pub struct MediaAdapter {
    format: MediaFormat,
    advanced: Box<dyn AdvancedMediaPlayer>,
    play: AdvancedPlay,
}

impl MediaAdapter {
    /// Picks the adaptee for `format` and the adaptee method to call. Mp3 has
    /// no advanced player.
    pub fn new(format: MediaFormat) -> Result<Self, PatternError> {
        let advanced: Box<dyn AdvancedMediaPlayer>;
        let play: AdvancedPlay;
        match format {
            MediaFormat::Vlc => {
                advanced = Box::new(VlcPlayer);
                play = |player, file| player.play_vlc(file);
            }
            MediaFormat::Mp4 => {
                advanced = Box::new(Mp4Player);
                play = |player, file| player.play_mp4(file);
            }
            MediaFormat::Mp3 => return Err(PatternError::UnsupportedFormat(format.to_string())),
        }
        Ok(Self {
            format,
            advanced,
            play,
        })
    }

    pub fn format(&self) -> MediaFormat {
        self.format
    }
}

impl MediaPlayer for MediaAdapter {
    fn play(&self, _audio_type: &str, file_name: &str) -> String {
        (self.play)(self.advanced.as_ref(), file_name)
    }
}

// ============================================================================
// Client-facing dispatcher
// ============================================================================

/// Plays mp3 itself and hands every other known format to a `MediaAdapter`.
#[derive(Default)]
pub struct AudioPlayer;

impl MediaPlayer for AudioPlayer {
    fn play(&self, audio_type: &str, file_name: &str) -> String {
        let format = match audio_type.parse::<MediaFormat>() {
            Ok(format) => format,
            Err(err) => {
                warn!(%err, file_name, "rejecting media request");
                return format!("Invalid media. {}", err);
            }
        };

        if format == MediaFormat::Mp3 {
            return format!("Playing mp3 file. Name: {}", file_name);
        }

        debug!(%format, file_name, "routing through media adapter");
        match MediaAdapter::new(format) {
            Ok(adapter) => adapter.play(audio_type, file_name),
            Err(err) => format!("Invalid media. {}", err),
        }
    }
}

// ============================================================================
// Zero-cost Adapter with Generics
// ============================================================================

pub trait PlayVlc {
    fn play_vlc(&self, path: &str) -> String;
}

impl PlayVlc for VlcPlayer {
    fn play_vlc(&self, path: &str) -> String {
        AdvancedMediaPlayer::play_vlc(self, path)
    }
}

/// Monomorphized adapter: no trait object, no format dispatch.
pub struct GenericAdapter<T> {
    inner: T,
}

impl<T: PlayVlc> GenericAdapter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: PlayVlc> MediaPlayer for GenericAdapter<T> {
    fn play(&self, _audio_type: &str, file_name: &str) -> String {
        self.inner.play_vlc(file_name)
    }
}

/// Plays the classic sample requests and returns the lines printed.
pub fn demo() -> Vec<String> {
    let player = AudioPlayer;
    let requests = [
        ("mp3", "beyond the horizon.mp3"),
        ("mp4", "alone.mp4"),
        ("vlc", "far far away.vlc"),
        ("avi", "mind me.avi"),
    ];

    requests
        .iter()
        .map(|(audio_type, file_name)| {
            let line = player.play(audio_type, file_name);
            println!("{}", line);
            line
        })
        .collect()
}
