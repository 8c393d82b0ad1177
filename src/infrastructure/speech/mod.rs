mod piper_engine;

pub use piper_engine::PiperEngine;
