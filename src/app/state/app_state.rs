use crate::app::CommandLog;
use crate::core::SegmentNetwork;
use crate::shared::LinesOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use super::{DrawingState, ViewState};

/// Zähler der laufenden Sitzung (nur Anzeige)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Vom Benutzer gezeichnete Segmente
    pub committed: usize,
    /// Abgewiesene Commit-Versuche
    pub refused: usize,
    /// Verdrängte Segmente (Zeichnen und Bestückung)
    pub evicted: usize,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Lebende Segmente
    pub network: SegmentNetwork,
    /// Anker und Cursor
    pub drawing: DrawingState,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen
    pub options: LinesOptions,
    /// Pfad der Optionen-Datei
    pub options_path: PathBuf,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Sitzungs-Statistik
    pub stats: SessionStats,
    /// Zufallsquelle der Bestückung
    pub rng: StdRng,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(LinesOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: LinesOptions) -> Self {
        let rng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            network: SegmentNetwork::new(),
            drawing: DrawingState::new(),
            view: ViewState::new(&options),
            options_path: LinesOptions::config_path(),
            options,
            show_options_dialog: false,
            command_log: CommandLog::new(),
            stats: SessionStats::default(),
            rng,
            should_exit: false,
        }
    }

    /// Anzahl lebender Segmente (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.network.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
