use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ggplot::config::{LoaderConfig, MountConfig};
use ggplot::data::correction::correct;
use ggplot::data::export::write_corrected;
use ggplot::data::loader::load_log;
use ggplot::data::model::{CorrectedLog, SensorLog};

use crate::color::{ColorMode, PointGroup, group_points};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Where the current log came from.
    pub source: Option<PathBuf>,

    /// Raw recording as loaded.
    pub raw: Option<SensorLog>,

    /// Vehicle-frame series for the current mount.
    pub corrected: Option<CorrectedLog>,

    /// Mount angles applied to `raw`.
    pub mount: MountConfig,

    /// Angles being edited in the side panel, applied on demand.
    pub pending_mount: MountConfig,

    pub loader: LoaderConfig,

    pub title: String,

    pub color_mode: ColorMode,

    /// Coloured point groups for the plot (cached).
    pub groups: Vec<PointGroup>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(mount: MountConfig, loader: LoaderConfig, title: impl Into<String>) -> Self {
        Self {
            source: None,
            raw: None,
            corrected: None,
            mount,
            pending_mount: mount,
            loader,
            title: title.into(),
            color_mode: ColorMode::default(),
            groups: Vec::new(),
            status_message: None,
        }
    }

    /// Ingest an already corrected recording.
    pub fn set_log(&mut self, source: PathBuf, raw: SensorLog, corrected: CorrectedLog) {
        self.source = Some(source);
        self.raw = Some(raw);
        self.corrected = Some(corrected);
        self.status_message = None;
        self.regroup();
    }

    /// Load and correct a new recording, keeping the current one on failure.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let raw = load_log(path, &self.loader)
            .with_context(|| format!("loading {}", path.display()))?;
        let corrected = correct(&raw, &self.mount).context("correcting orientation")?;
        self.set_log(path.to_path_buf(), raw, corrected);
        Ok(())
    }

    /// Re-run the correction with the angles from the side panel.
    pub fn apply_mount(&mut self) -> Result<()> {
        let mount = self.pending_mount;
        if let Some(raw) = &self.raw {
            let corrected = correct(raw, &mount).context("correcting orientation")?;
            self.corrected = Some(corrected);
        } else {
            mount.validate()?;
        }
        log::info!(
            "Mount set to pitch={}° yaw={}° roll={}° G={}",
            mount.pitch_deg,
            mount.yaw_deg,
            mount.roll_deg,
            mount.gravity
        );
        self.mount = mount;
        self.status_message = None;
        self.regroup();
        Ok(())
    }

    pub fn load_mount(&mut self, path: &Path) -> Result<()> {
        self.pending_mount = MountConfig::from_json_file(path)?;
        self.apply_mount()
    }

    pub fn export(&self, path: &Path) -> Result<()> {
        let corrected = self
            .corrected
            .as_ref()
            .context("no corrected data to export")?;
        write_corrected(path, corrected, self.loader.delimiter)?;
        Ok(())
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
        self.regroup();
    }

    /// Rebuild the cached point groups.
    fn regroup(&mut self) {
        self.groups = self
            .corrected
            .as_ref()
            .map(|c| group_points(c, self.color_mode))
            .unwrap_or_default();
    }

    /// Record a failed action so the user sees it.
    pub fn report(&mut self, action: &str, err: anyhow::Error) {
        log::error!("{action} failed: {err:#}");
        self.status_message = Some(format!("Error: {err:#}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ggplot::data::model::CHANNEL_COUNT;
    use ggplot::error::Error;
    use std::io::Write;

    fn log_file(rows: &[[f64; 3]]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ax;ay;az;gx;gy;gz;mx;my;mz;ox;oy;oz;T;livB;Volt;t").unwrap();
        for (i, a) in rows.iter().enumerate() {
            let mut row = vec![0.0; CHANNEL_COUNT];
            row[0..3].copy_from_slice(a);
            row[CHANNEL_COUNT - 1] = i as f64;
            let tokens: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(file, "{}", tokens.join(";")).unwrap();
        }
        file
    }

    fn state() -> AppState {
        AppState::new(MountConfig::default(), LoaderConfig::default(), "test")
    }

    #[test]
    fn test_open_populates_plot() {
        let file = log_file(&[[1.0, 9.8, 0.2], [-0.5, 9.7, 0.1], [0.0, 9.9, -0.3]]);
        let mut s = state();
        s.open(file.path()).unwrap();

        assert_eq!(s.corrected.as_ref().unwrap().len(), 3);
        assert_eq!(s.groups.iter().map(|g| g.points.len()).sum::<usize>(), 3);
        assert_eq!(s.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_failed_open_keeps_previous_log() {
        let file = log_file(&[[1.0, 9.8, 0.2]]);
        let mut s = state();
        s.open(file.path()).unwrap();

        let empty = log_file(&[]);
        let err = s.open(empty.path()).unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<Error>(),
                Some(Error::EmptySeries { channel: "long" })
            ),
            "{err:#}"
        );
        assert_eq!(s.source.as_deref(), Some(file.path()));
        assert!(s.corrected.is_some());
    }

    #[test]
    fn test_apply_mount_recorrects() {
        let file = log_file(&[[0.0, 9.81, 0.0], [0.0, 0.0, 9.81]]);
        let mut s = state();
        s.open(file.path()).unwrap();
        let before = s.corrected.clone().unwrap();

        s.pending_mount = MountConfig::level();
        s.apply_mount().unwrap();

        assert_eq!(s.mount, MountConfig::level());
        assert_ne!(s.corrected.unwrap().long, before.long);
    }

    #[test]
    fn test_rejected_mount_is_not_applied() {
        let mut s = state();
        s.pending_mount.gravity = 0.0;
        assert!(s.apply_mount().is_err());
        assert_eq!(s.mount, MountConfig::default());
    }

    #[test]
    fn test_export_without_data_fails() {
        let s = state();
        let out = tempfile::NamedTempFile::new().unwrap();
        assert!(s.export(out.path()).is_err());
    }
}
