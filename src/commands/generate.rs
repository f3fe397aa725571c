//! Word generation for one request
//!
//! Ties the pieces together: validate settings, sample the dictionary, sort by
//! width for list output, then hand the text to the output surface.

use crate::generator::{WordSampler, sort_by_width};
use crate::host::{CharacterSource, GlyphMetrics, Notifier, OutputSurface};
use crate::input::{ConfigError, prepare};
use crate::settings::Settings;
use log::{debug, info, warn};
use rand::Rng;

/// Shown when a request produces no words
pub const NO_WORDS_NOTICE: &str = "No matching words found.";

/// How the generated text reached the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Shown on the output surface
    Surface,
    /// The surface failed; the caller should print the text to the console
    Console,
    /// Nothing to show
    Nothing,
}

/// Result of a generation request
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Accepted words in output order
    pub words: Vec<String>,
    /// Words joined for display
    pub text: String,
    /// Dictionary draws made
    pub attempts: usize,
    pub delivery: Delivery,
}

/// Long-lived generation controller
///
/// Holds the state that outlives a single request: the sampler configuration
/// and whether the user was already told the output surface is unavailable.
#[derive(Debug, Clone, Default)]
pub struct Session {
    sampler: WordSampler,
    warned_about_surface: bool,
}

impl Session {
    #[must_use]
    pub const fn new(sampler: WordSampler) -> Self {
        Self {
            sampler,
            warned_about_surface: false,
        }
    }

    /// Whether the surface-unavailable notice was already shown
    #[must_use]
    pub const fn warned_about_surface(&self) -> bool {
        self.warned_about_surface
    }

    /// Validate `settings`, generate words from `dictionary` and show them
    ///
    /// `font` is the open font, if any: it restricts the character set and
    /// supplies metrics for width sorting. Without a font, list output keeps
    /// the sampling order.
    ///
    /// # Errors
    ///
    /// Returns the `ConfigError` that rejected the settings. The error has
    /// already been reported through `notifier`.
    pub fn make_words<F, S, N, R>(
        &mut self,
        settings: &Settings,
        dictionary: &[String],
        font: Option<&F>,
        surface: &mut S,
        notifier: &mut N,
        rng: &mut R,
    ) -> Result<GenerateOutcome, ConfigError>
    where
        F: CharacterSource + GlyphMetrics + Sync + ?Sized,
        S: OutputSurface + ?Sized,
        N: Notifier + ?Sized,
        R: Rng + ?Sized,
    {
        let request = match prepare(settings, font, notifier) {
            Ok(request) => request,
            Err(err) => {
                notifier.notify(&err.to_string());
                warn!("aborted because of errors");
                return Err(err);
            }
        };

        let result = self.sampler.sample(
            dictionary,
            request.quota,
            &request.constraints,
            request.case,
            rng,
        );
        let attempts = result.attempts;

        if result.words.is_empty() {
            notifier.notify(NO_WORDS_NOTICE);
            return Ok(GenerateOutcome {
                words: Vec::new(),
                text: String::new(),
                attempts,
                delivery: Delivery::Nothing,
            });
        }
        if result.is_short_of(request.quota) {
            info!(
                "found {} of {} requested words",
                result.words.len(),
                request.quota
            );
        }

        let (words, separator) = if request.list_output {
            let words = match font {
                Some(metrics) => sort_by_width(result.words.as_slice(), metrics),
                None => {
                    debug!("no font open, list output keeps sampling order");
                    result.words.into_vec()
                }
            };
            (words, "\n")
        } else {
            (result.words.into_vec(), " ")
        };
        let text = words.join(separator);

        let delivery = match surface.show(&text) {
            Ok(()) => Delivery::Surface,
            Err(err) => {
                debug!("output surface failed: {err}");
                if !self.warned_about_surface {
                    notifier.notify(
                        "No output surface available; words will be displayed in the console.",
                    );
                    self.warned_about_surface = true;
                }
                Delivery::Console
            }
        };

        Ok(GenerateOutcome {
            words,
            text,
            attempts,
            delivery,
        })
    }
}
