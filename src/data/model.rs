use std::fmt;

// ---------------------------------------------------------------------------
// Channel – one column of the phone logger output
// ---------------------------------------------------------------------------

pub const CHANNEL_COUNT: usize = 16;

/// The channels written by the phone logger, in file column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Accelerometer, device X axis (m/s²).
    Ax,
    /// Accelerometer, device Y axis (m/s²).
    Ay,
    /// Accelerometer, device Z axis (m/s²).
    Az,
    Gx,
    Gy,
    Gz,
    Mx,
    My,
    Mz,
    Ox,
    Oy,
    Oz,
    Temperature,
    /// Battery-low flag.
    BatteryLow,
    Voltage,
    /// Timestamp.
    Time,
}

impl Channel {
    /// Every channel, in the order the columns appear in the file.
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::Ax,
        Channel::Ay,
        Channel::Az,
        Channel::Gx,
        Channel::Gy,
        Channel::Gz,
        Channel::Mx,
        Channel::My,
        Channel::Mz,
        Channel::Ox,
        Channel::Oy,
        Channel::Oz,
        Channel::Temperature,
        Channel::BatteryLow,
        Channel::Voltage,
        Channel::Time,
    ];

    /// Column position in the file.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short identifier used by the logger.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Ax => "ax",
            Channel::Ay => "ay",
            Channel::Az => "az",
            Channel::Gx => "gx",
            Channel::Gy => "gy",
            Channel::Gz => "gz",
            Channel::Mx => "mx",
            Channel::My => "my",
            Channel::Mz => "mz",
            Channel::Ox => "ox",
            Channel::Oy => "oy",
            Channel::Oz => "oz",
            Channel::Temperature => "T",
            Channel::BatteryLow => "livB",
            Channel::Voltage => "Volt",
            Channel::Time => "t",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// SensorLog – the raw recording
// ---------------------------------------------------------------------------

/// A full recording: one series per channel, rows in time order.
///
/// Rows can only be appended whole, so every series always has the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorLog {
    series: [Vec<f64>; CHANNEL_COUNT],
}

impl SensorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = [f64; CHANNEL_COUNT]>,
    {
        let mut log = Self::new();
        for row in rows {
            log.push_row(&row);
        }
        log
    }

    /// Append one sample of every channel.
    pub fn push_row(&mut self, row: &[f64; CHANNEL_COUNT]) {
        for (series, &value) in self.series.iter_mut().zip(row) {
            series.push(value);
        }
    }

    pub fn channel(&self, channel: Channel) -> &[f64] {
        &self.series[channel.index()]
    }

    pub(crate) fn channel_mut(&mut self, channel: Channel) -> &mut Vec<f64> {
        &mut self.series[channel.index()]
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.series[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elapsed time between the first and last row, in the logger's time unit.
    pub fn duration(&self) -> Option<f64> {
        let t = self.channel(Channel::Time);
        Some(t.last()? - t.first()?)
    }
}

// ---------------------------------------------------------------------------
// Vehicle frame
// ---------------------------------------------------------------------------

/// Axes of the vehicle frame, in g.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleAxis {
    Longitudinal,
    Lateral,
    Vertical,
}

impl VehicleAxis {
    pub const ALL: [VehicleAxis; 3] = [
        VehicleAxis::Longitudinal,
        VehicleAxis::Lateral,
        VehicleAxis::Vertical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VehicleAxis::Longitudinal => "long",
            VehicleAxis::Lateral => "later",
            VehicleAxis::Vertical => "vert",
        }
    }
}

/// Result of the orientation correction.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectedLog {
    /// Input samples with `ay` negated into a right-handed frame.
    pub device: SensorLog,
    /// Forward acceleration, g, mean-centered.
    pub long: Vec<f64>,
    /// Lateral acceleration, g, mean-centered.
    pub later: Vec<f64>,
    /// Vertical acceleration, g, mean-centered.
    pub vert: Vec<f64>,
    /// Means removed from `long`, `later` and `vert`.
    pub offsets: [f64; 3],
}

impl CorrectedLog {
    pub fn len(&self) -> usize {
        self.long.len()
    }

    pub fn is_empty(&self) -> bool {
        self.long.is_empty()
    }

    pub fn axis(&self, axis: VehicleAxis) -> &[f64] {
        match axis {
            VehicleAxis::Longitudinal => &self.long,
            VehicleAxis::Lateral => &self.later,
            VehicleAxis::Vertical => &self.vert,
        }
    }

    /// `(long, later)` pairs in time order, ready for the GG diagram.
    pub fn gg_points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.long
            .iter()
            .zip(&self.later)
            .map(|(&long, &later)| [long, later])
    }

    pub fn summary(&self, axis: VehicleAxis) -> SeriesSummary {
        let offset = match axis {
            VehicleAxis::Longitudinal => self.offsets[0],
            VehicleAxis::Lateral => self.offsets[1],
            VehicleAxis::Vertical => self.offsets[2],
        };
        SeriesSummary::of(self.axis(axis), offset)
    }
}

/// Range statistics of a derived series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub min: f64,
    pub max: f64,
    /// Largest absolute value.
    pub peak: f64,
    /// Mean that was removed during centering.
    pub offset: f64,
}

impl SeriesSummary {
    pub fn of(values: &[f64], offset: f64) -> Self {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let peak = values.iter().map(|v| v.abs()).fold(0.0, f64::max);
        SeriesSummary {
            min,
            max,
            peak,
            offset,
        }
    }
}
