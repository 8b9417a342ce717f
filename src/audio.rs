//! Audio system using Web Audio API
//!
//! The three cues are synthesised with oscillators, no sound files needed.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::platform::AudioSink;
use crate::settings::Settings;
use crate::sim::AudioCue;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.effective_volume(),
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Short rising arpeggio; `step` is the delay between notes
    fn play_notes(
        &self,
        ctx: &AudioContext,
        freqs: &[f32],
        step: f64,
        len: f64,
        osc_type: OscillatorType,
        level: f32,
    ) {
        for (i, freq) in freqs.iter().enumerate() {
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, osc_type) {
                let t = ctx.current_time() + i as f64 * step;
                gain.gain().set_value_at_time(level, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + len)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + len + 0.05).ok();
            }
        }
    }

    /// Caught an insect or a heart - quick happy ding
    fn play_small_win(&self, ctx: &AudioContext) {
        self.play_notes(
            ctx,
            &[600.0, 900.0],
            0.06,
            0.12,
            OscillatorType::Sine,
            self.volume * 0.25,
        );
    }

    /// Score milestone - triumphant fanfare
    fn play_big_win(&self, ctx: &AudioContext) {
        self.play_notes(
            ctx,
            &[500.0, 600.0, 700.0, 800.0, 1000.0],
            0.08,
            0.25,
            OscillatorType::Triangle,
            self.volume * 0.25,
        );
    }

    /// Lost a life - ominous descend
    fn play_loss(&self, ctx: &AudioContext) {
        let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Sawtooth) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(self.volume * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.5)
            .ok();
        osc.frequency().set_value_at_time(300.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(60.0, t + 0.5)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.6).ok();
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, cue: AudioCue) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match cue {
            AudioCue::SmallWin => self.play_small_win(ctx),
            AudioCue::BigWin => self.play_big_win(ctx),
            AudioCue::Loss => self.play_loss(ctx),
        }
    }
}
