/// Audio cues the game asks the front-end to play.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Eat,
    GameOver,
}

/// Receives cues. Implemented by whatever owns the audio device.
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// Plays nothing. Stands in when sound resources are missing.
#[derive(Debug, Default, Copy, Clone)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _cue: SoundCue) {}
}
