use crate::constants::{MASTER_VOLUME, SOUND_URL};
use boing_core::{AudioCue, BoingAudio};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("[audio] {} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

struct LiveVoice {
    gain: web::GainNode,
    ends_at: f64,
}

/// Layered sample playback: every boing starts its own voice so quick
/// releases overlap instead of cutting each other off.
pub struct BoingPlayer {
    audio_ctx: web::AudioContext,
    master: web::GainNode,
    sample: Rc<RefCell<Option<web::AudioBuffer>>>,
    voices: Vec<LiveVoice>,
}

impl BoingPlayer {
    pub fn new(audio_ctx: web::AudioContext) -> Result<Self, ()> {
        let master = create_gain(&audio_ctx, MASTER_VOLUME, "Master")?;
        _ = master.connect_with_audio_node(&audio_ctx.destination());
        Ok(Self {
            audio_ctx,
            master,
            sample: Rc::new(RefCell::new(None)),
            voices: Vec::new(),
        })
    }

    /// Fetch and decode the boing sample in the background. Playback is
    /// silent until it arrives.
    pub fn load_sample(&self) {
        let audio_ctx = self.audio_ctx.clone();
        let slot = self.sample.clone();
        spawn_local(async move {
            match fetch_sample(&audio_ctx, SOUND_URL).await {
                Ok(buf) => {
                    log::info!("[audio] sample loaded ({:.2}s)", buf.duration());
                    *slot.borrow_mut() = Some(buf);
                }
                Err(e) => log::error!("[audio] failed to load boing sound: {:?}", e),
            }
        });
    }

    /// Browsers keep the context suspended until a user gesture.
    pub fn unlock(&self) {
        if self.audio_ctx.state() != web::AudioContextState::Running {
            _ = self.audio_ctx.resume();
        }
    }

    fn prune(&mut self, now: f64) {
        self.voices.retain(|v| v.ends_at > now);
    }
}

impl BoingAudio for BoingPlayer {
    fn play(&mut self, cue: &AudioCue) {
        let Some(buffer) = self.sample.borrow().clone() else {
            return;
        };
        let now = self.audio_ctx.current_time();
        self.prune(now);

        let Ok(src) = web::AudioBufferSourceNode::new(&self.audio_ctx) else {
            log::warn!("[audio] could not create buffer source");
            return;
        };
        let Ok(gain) = create_gain(&self.audio_ctx, cue.volume as f32, "voice") else {
            return;
        };
        src.set_buffer(Some(&buffer));
        src.playback_rate().set_value(cue.rate as f32);
        _ = gain.gain().set_value_at_time(cue.volume as f32, now);
        _ = gain
            .gain()
            .linear_ramp_to_value_at_time(cue.fade_to as f32, now + cue.fade_ms / 1000.0);
        _ = src.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&self.master);
        if let Err(e) = src.start() {
            log::warn!("[audio] failed to play boing sound: {:?}", e);
            return;
        }
        let length = buffer.duration() / cue.rate.max(0.01);
        self.voices.push(LiveVoice {
            gain,
            ends_at: now + length,
        });
    }

    fn fade_all(&mut self, fade_ms: f64) {
        let now = self.audio_ctx.current_time();
        self.prune(now);
        for v in &self.voices {
            let param = v.gain.gain();
            let current = param.value();
            _ = param.cancel_scheduled_values(now);
            _ = param.set_value_at_time(current, now);
            _ = param.linear_ramp_to_value_at_time(0.0, now + fade_ms / 1000.0);
        }
    }
}

async fn fetch_sample(
    audio_ctx: &web::AudioContext,
    url: &str,
) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("status {}", resp.status());
    }
    let bytes = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let decoded = JsFuture::from(
        audio_ctx
            .decode_audio_data(&bytes)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
