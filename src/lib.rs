//! Word-at-a-time text reader with speech.
//!
//! Raw text is segmented into tokens ([`reading`]), walked sequentially or
//! at random by a clock-driven scheduler ([`engine`]), and each token is
//! handed to a speech synthesizer ([`speech`]). The terminal front-end lives
//! in [`app`] and [`ui`].

pub mod app;
pub mod engine;
pub mod input;
pub mod reading;
pub mod speech;
pub mod ui;
