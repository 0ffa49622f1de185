//! Integration tests for NetCDF read/write of forcing series.

use std::path::{Path, PathBuf};

use firn_io::{
    IoError, ReaderConfig, WriterConfig, XTIME_WIDTH, read_forcing, write_forcing,
};
use firn_resample::{ForcingField, ForcingSeries};
use tempfile::tempdir;

// ---------------------------------------------------------------------------
// Helper: programmatic NetCDF fixture builder
// ---------------------------------------------------------------------------

/// Builds a minimal annual forcing file: an `xtime` byte variable plus a
/// per-year scalar `smb`, a per-year gridded `thermal_forcing`, and a
/// static `mask`.
struct FixtureBuilder {
    years: Vec<i32>,
    /// Raw stamp text per year; defaults to `YYYY-07-01_00:00:00`.
    stamps: Option<Vec<String>>,
    n_cells: usize,
}

impl FixtureBuilder {
    fn new(years: Vec<i32>) -> Self {
        Self {
            years,
            stamps: None,
            n_cells: 3,
        }
    }

    /// Replace the generated stamp texts entirely.
    fn with_stamps(mut self, stamps: Vec<String>) -> Self {
        self.stamps = Some(stamps);
        self
    }

    /// Write the fixture to a NetCDF file and return the path.
    fn write(&self, dir: &Path) -> PathBuf {
        let path = dir.join("forcing.nc");
        let mut file = netcdf::create(&path).expect("failed to create NetCDF file");

        let nt = self.years.len();
        file.add_dimension("Time", nt).expect("add dim Time");
        file.add_dimension("StrLen", XTIME_WIDTH)
            .expect("add dim StrLen");
        file.add_dimension("nCells", self.n_cells)
            .expect("add dim nCells");

        // xtime: mid-year stamps by default, NUL-padded like upstream files.
        let stamps: Vec<String> = match &self.stamps {
            Some(s) => s.clone(),
            None => self
                .years
                .iter()
                .map(|y| format!("{y:04}-07-01_00:00:00"))
                .collect(),
        };
        let mut raw = Vec::with_capacity(nt * XTIME_WIDTH);
        for stamp in &stamps {
            let mut record = stamp.as_bytes().to_vec();
            record.resize(XTIME_WIDTH, 0);
            raw.extend_from_slice(&record);
        }
        {
            let mut var = file
                .add_variable::<u8>("xtime", &["Time", "StrLen"])
                .expect("add var xtime");
            var.put_values(&raw, ..).expect("put xtime values");
        }

        // Per-year scalar: the year number.
        {
            let smb: Vec<f64> = self.years.iter().map(|&y| y as f64).collect();
            let mut var = file
                .add_variable::<f64>("smb", &["Time"])
                .expect("add var smb");
            var.put_values(&smb, ..).expect("put smb values");
        }

        // Per-year gridded: year * 100 + cell.
        {
            let tf: Vec<f64> = self
                .years
                .iter()
                .flat_map(|&y| (0..self.n_cells).map(move |c| (y * 100 + c as i32) as f64))
                .collect();
            let mut var = file
                .add_variable::<f64>("thermal_forcing", &["Time", "nCells"])
                .expect("add var thermal_forcing");
            var.put_values(&tf, ..).expect("put thermal_forcing values");
        }

        // Static field without a time dimension.
        {
            let mask: Vec<f64> = (0..self.n_cells).map(|c| (c % 2) as f64).collect();
            let mut var = file
                .add_variable::<f64>("mask", &["nCells"])
                .expect("add var mask");
            var.put_values(&mask, ..).expect("put mask values");
        }

        path
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

#[test]
fn read_basic() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new((1995..=2005).collect()).write(dir.path());

    let series = read_forcing(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(series.n_years(), 11);
    assert_eq!(series.first_year(), 1995);
    assert_eq!(series.last_year(), 2005);

    let smb = series.field("smb").unwrap();
    assert!(smb.is_per_year());
    assert_eq!(smb.record(0), &[1995.0]);

    let tf = series.field("thermal_forcing").unwrap();
    assert!(tf.is_per_year());
    assert_eq!(tf.shape(), &[11, 3]);
    assert_eq!(tf.record(1), &[199600.0, 199601.0, 199602.0]);

    let mask = series.field("mask").unwrap();
    assert!(!mask.is_per_year());
    assert_eq!(mask.values(), &[0.0, 1.0, 0.0]);
}

#[test]
fn read_missing_file() {
    let result = read_forcing(Path::new("/nonexistent/forcing.nc"), &ReaderConfig::default());
    assert!(matches!(result, Err(IoError::FileNotFound { .. })));
}

#[test]
fn read_missing_time_variable() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(vec![1995, 1996]).write(dir.path());

    let config = ReaderConfig::default().with_time_var("time_stamps");
    let result = read_forcing(&path, &config);
    assert!(matches!(result, Err(IoError::MissingVariable { .. })));
}

#[test]
fn read_unparseable_stamp() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(vec![1995, 1996])
        .with_stamps(vec![
            "1995-07-01_00:00:00".to_string(),
            "not a time".to_string(),
        ])
        .write(dir.path());

    let result = read_forcing(&path, &ReaderConfig::default());
    assert!(matches!(result, Err(IoError::Calendar { .. })));
}

#[test]
fn read_duplicate_years_rejected() {
    // Two records in the same calendar year violate the series invariant.
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(vec![1995, 1995]).write(dir.path());

    let result = read_forcing(&path, &ReaderConfig::default());
    assert!(matches!(result, Err(IoError::Forcing { .. })));
}

#[test]
fn read_empty_config_rejected() {
    let config = ReaderConfig::default().with_time_var("");
    let result = read_forcing(Path::new("unused.nc"), &config);
    assert!(matches!(result, Err(IoError::Validation { .. })));
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

fn small_series() -> ForcingSeries {
    let years = vec![2101, 2102, 2103];
    let smb = ForcingField::per_year(
        "smb",
        vec!["Time".to_string()],
        vec![3],
        vec![1.5, 2.5, 3.5],
    )
    .unwrap();
    let mask = ForcingField::constant(
        "mask",
        vec!["nCells".to_string()],
        vec![2],
        vec![1.0, 0.0],
    )
    .unwrap();
    ForcingSeries::new(years, vec![smb, mask]).unwrap()
}

#[test]
fn write_then_read_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.nc");

    let series = small_series();
    write_forcing(&path, &series, &WriterConfig::default()).unwrap();

    let back = read_forcing(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(back, series);
}

#[test]
fn written_stamps_are_first_of_year_space_padded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.nc");

    write_forcing(&path, &small_series(), &WriterConfig::default()).unwrap();

    let file = netcdf::open(&path).unwrap();
    let var = file.variable("xtime").unwrap();
    let raw = var.get_values::<u8, _>(..).unwrap();
    assert_eq!(raw.len(), 3 * XTIME_WIDTH);

    let first = &raw[..XTIME_WIDTH];
    assert_eq!(&first[..19], b"2101-01-01_00:00:00");
    assert!(first[19..].iter().all(|&b| b == b' '));
}

#[test]
fn write_conflicting_dimension_extent() {
    // Two fields claim different sizes for the same dimension name.
    let years = vec![2101];
    let a = ForcingField::constant("a", vec!["nCells".to_string()], vec![2], vec![0.0; 2]).unwrap();
    let b = ForcingField::constant("b", vec!["nCells".to_string()], vec![3], vec![0.0; 3]).unwrap();
    let series = ForcingSeries::new(years, vec![a, b]).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.nc");
    let result = write_forcing(&path, &series, &WriterConfig::default());
    assert!(matches!(result, Err(IoError::DimensionMismatch { .. })));
}

#[test]
fn custom_time_names_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.nc");

    let years = vec![2101, 2102];
    let smb = ForcingField::per_year(
        "smb",
        vec!["record".to_string()],
        vec![2],
        vec![1.0, 2.0],
    )
    .unwrap();
    let series = ForcingSeries::new(years, vec![smb]).unwrap();

    let writer = WriterConfig::default()
        .with_time_var("stamps")
        .with_time_dim("record");
    write_forcing(&path, &series, &writer).unwrap();

    let reader = ReaderConfig::default()
        .with_time_var("stamps")
        .with_time_dim("record");
    let back = read_forcing(&path, &reader).unwrap();
    assert_eq!(back, series);
}
