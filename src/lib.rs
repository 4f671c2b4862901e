//! The TJA format metadata parser.
//!
//! TJA is a text format of taiko rhythm game
//! charts. This crate reads the metadata of a chart into a structured document, then derives the
//! list of audio files it needs and the record stored into a song database.
//!
//! # Feature flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` of the model types and JSON output of the
//!   storage record.
//! - `diagnostics` (default): rendering parse warnings with [`ariadne`].
//!
//! # Example
//!
//! ```
//! use tja_rs::tja::prelude::*;
//!
//! let source = "\
//! TITLE:Dan Test
//! WAVE:first.ogg
//! COURSE:Dan
//! LEVEL:10
//! EXAM1:g,97,100,m
//! #START
//! #NEXTSONG First,,Pop,first.ogg,1000,100
//! #DELAY 2
//! #NEXTSONG Second,,Pop,second.ogg,1000,100
//! 1111,
//! #END
//! ";
//! let TjaOutput { document, warnings } = parse_tja(source);
//! assert!(warnings.is_empty());
//! assert!(document.is_exam_chart);
//! assert_eq!(document.exam_songs.len(), 2);
//! assert_eq!(document.audio_manifest(), vec!["first.ogg", "second.ogg"]);
//!
//! let record = document.to_record("42", 1_700_000_000_000_000_000);
//! assert_eq!(record.music_type, "ogg");
//! assert_eq!(record.offset, 0);
//! ```

#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod tja;
