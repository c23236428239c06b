use crate::constants::*;
use crate::interaction::BoingEvent;
use crate::report::{BoingCounter, Reporter};

/// Playback parameters for one boing voice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioCue {
    pub rate: f64,
    pub volume: f64,
    pub fade_to: f64,
    pub fade_ms: f64,
}

/// Harder releases play higher and louder. Slow motion drops the pitch and
/// stretches the fade to match the slowed spring.
pub fn audio_cue(force_magnitude: f64, slomo: bool) -> AudioCue {
    let normalized = (force_magnitude / FORCE_NORMALIZER).clamp(0.0, 1.0);
    let rate = MIN_RATE + normalized * (MAX_RATE - MIN_RATE);
    let volume = MIN_VOLUME + normalized * (MAX_VOLUME - MIN_VOLUME);
    if slomo {
        AudioCue {
            rate: rate * SLOMO_AUDIO_RATE,
            volume,
            fade_to: FADE_TO_VOLUME,
            fade_ms: FADE_MS * SLOMO_FACTOR,
        }
    } else {
        AudioCue {
            rate,
            volume,
            fade_to: FADE_TO_VOLUME,
            fade_ms: FADE_MS,
        }
    }
}

/// Sound output for boings.
pub trait BoingAudio {
    fn play(&mut self, cue: &AudioCue);
    /// Quickly silence every voice still sounding.
    fn fade_all(&mut self, fade_ms: f64);
}

/// Routes boings to audio, the local counter and the reporter.
pub struct Emitter {
    audio: Box<dyn BoingAudio>,
    reporter: Box<dyn Reporter>,
    counter: BoingCounter,
}

impl Emitter {
    pub fn new(audio: Box<dyn BoingAudio>, reporter: Box<dyn Reporter>, counter: BoingCounter) -> Self {
        Self {
            audio,
            reporter,
            counter,
        }
    }

    pub fn boing(&mut self, event: &BoingEvent, slomo: bool) -> AudioCue {
        let cue = audio_cue(event.force_magnitude, slomo);
        self.audio.play(&cue);
        let count = self.counter.increment();
        self.reporter.report(event);
        log::debug!(
            "[boing] force={:.1} angle={:.3} ratio={:.3} rate={:.2} count={}",
            event.force_magnitude,
            event.angle,
            event.distance_ratio,
            cue.rate,
            count
        );
        cue
    }

    /// Knob caught mid-air or the toy was reset: cut any ringing voices.
    pub fn hush(&mut self) {
        self.audio.fade_all(CATCH_FADE_MS);
    }

    #[inline]
    pub fn local_count(&self) -> u64 {
        self.counter.count()
    }

    #[inline]
    pub fn global_count(&self) -> Option<u64> {
        self.reporter.latest_count()
    }

    pub fn refresh_global_count(&self) {
        self.reporter.refresh_count();
    }
}
