use log::info;

use crate::config::Settings;
use crate::sound::{Silent, SoundCue, SoundSink};
use crate::store::HighScoreStore;

/// App-wide state shared by every run: settings, the high score and the
/// audio front-end.
pub struct Context {
    pub settings: Settings,
    high_score: u32,
    store: HighScoreStore,
    sounds: Box<dyn SoundSink>,
}

impl Context {
    /// Loads the high score from `store` once, up front.
    pub fn new(settings: Settings, store: HighScoreStore, sounds: Box<dyn SoundSink>) -> Self {
        let high_score = store.load();
        info!("loaded high score {high_score} from {}", store.path().display());
        Self { settings, high_score, store, sounds }
    }

    pub fn silent(settings: Settings, store: HighScoreStore) -> Self {
        Self::new(settings, store, Box::new(Silent))
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn play(&mut self, cue: SoundCue) {
        if self.settings.sound_enabled {
            self.sounds.play(cue);
        }
    }

    /// Persists `score` if it beats the stored high score. Returns whether it did.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score <= self.high_score {
            return false;
        }
        info!("new high score {score} (was {})", self.high_score);
        self.high_score = score;
        self.store.save(score);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;

    use super::*;

    struct Recorder(Rc<RefCell<Vec<SoundCue>>>);

    impl SoundSink for Recorder {
        fn play(&mut self, cue: SoundCue) {
            self.0.borrow_mut().push(cue);
        }
    }

    fn scratch_store(name: &str) -> HighScoreStore {
        let dir = std::env::temp_dir().join(format!("snake_touch_ctx_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        HighScoreStore::new(dir.join("high_score.json"))
    }

    #[test]
    fn sound_is_gated_by_settings() {
        let cues = Rc::new(RefCell::new(Vec::new()));
        let mut ctx = Context::new(Settings::default(), scratch_store("gate"), Box::new(Recorder(cues.clone())));
        ctx.play(SoundCue::Eat);
        ctx.settings.toggle_sound();
        ctx.play(SoundCue::GameOver);
        assert_eq!(*cues.borrow(), vec![SoundCue::Eat]);
    }

    #[test]
    fn lower_score_never_overwrites() {
        let store = scratch_store("lower");
        store.save(150);
        let mut ctx = Context::silent(Settings::default(), store.clone());
        assert_eq!(ctx.high_score(), 150);
        assert!(!ctx.record_score(120));
        assert!(!ctx.record_score(150));
        assert_eq!(store.load(), 150);
        assert!(ctx.record_score(200));
        assert_eq!(ctx.high_score(), 200);
        assert_eq!(store.load(), 200);
    }
}
