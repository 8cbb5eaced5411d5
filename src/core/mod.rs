pub mod generator;
pub mod lexicon;
pub mod playback;
pub mod seed;
pub mod selection;
pub mod voice;
