use super::fields;
use super::tle_errors::TleErrors;
use crate::constants::*;
use crate::time::JulianDate;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumMismatch {
    pub line: u8,
    pub expected: u8,
    pub found: char,
}

/// Mean orbital elements of one object, decoded from a two-line element set.
///
/// Angles are kept in degrees and mean motion in revolutions per day, as
/// written in the element set; the `*_rad` accessors convert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    name: String,
    catalog_number: String,
    classification: char,
    international_designator: String,
    epoch: JulianDate,
    epoch_year: i32,
    epoch_day: f64,
    mean_motion_dot: f64,
    mean_motion_ddot: f64,
    bstar: f64,
    ephemeris_type: char,
    element_set_number: u32,
    inclination: f64,
    right_ascension: f64,
    eccentricity: f64,
    argument_of_perigee: f64,
    mean_anomaly: f64,
    mean_motion: f64,
    revolution_number: u32,
    checksum_mismatches: Vec<ChecksumMismatch>,
}

impl OrbitalElements {
    /// Parses the two data lines of an element set.
    ///
    /// `name` wins when given and non-blank; otherwise the catalog number
    /// names the object.
    pub fn parse(line1: &str, line2: &str, name: Option<&str>) -> Result<Self, TleErrors> {
        let line1 = check_line(line1, 1)?;
        let line2 = check_line(line2, 2)?;

        let catalog_number = fields::column(line1, 2..7).trim().to_string();
        let catalog_number_2 = fields::column(line2, 2..7).trim();
        if catalog_number != catalog_number_2 {
            return Err(TleErrors::CatalogMismatch {
                line1: catalog_number,
                line2: catalog_number_2.to_string(),
            });
        }

        let two_digit_year = fields::required_integer(line1, 18..20, "epoch year")? as i32;
        let epoch_year = if two_digit_year < 57 {
            2000 + two_digit_year
        } else {
            1900 + two_digit_year
        };
        let epoch_day = fields::decimal(line1, 20..32, "epoch day")?;
        let epoch = JulianDate::from_year_day(epoch_year, epoch_day)?;

        let inclination = fields::decimal(line2, 8..16, "inclination")?;
        if !(0.0..=180.0).contains(&inclination) {
            return Err(TleErrors::ElementOutOfRange {
                field: "inclination",
                value: inclination,
            });
        }
        let eccentricity = fields::implied_decimal(line2, 26..33, "eccentricity")?;
        let mean_motion = fields::decimal(line2, 52..63, "mean motion")?;
        if mean_motion <= 0.0 {
            return Err(TleErrors::ElementOutOfRange {
                field: "mean motion",
                value: mean_motion,
            });
        }

        let checksum_mismatches: Vec<ChecksumMismatch> = [(1, line1), (2, line2)]
            .into_iter()
            .filter_map(|(number, line)| {
                let expected = fields::checksum(line);
                let found = line.as_bytes()[68] as char;
                (found.to_digit(10) != Some(expected as u32)).then_some(ChecksumMismatch {
                    line: number,
                    expected,
                    found,
                })
            })
            .collect();
        for mismatch in &checksum_mismatches {
            warn!(
                "Checksum mismatch on line {} of {}: expected {}, found '{}'",
                mismatch.line, catalog_number, mismatch.expected, mismatch.found
            );
        }

        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => catalog_number.clone(),
        };

        Ok(Self {
            name,
            classification: line1.as_bytes()[7] as char,
            international_designator: fields::column(line1, 9..17).trim().to_string(),
            epoch,
            epoch_year,
            epoch_day,
            mean_motion_dot: fields::decimal(line1, 33..43, "mean motion first derivative")?,
            mean_motion_ddot: fields::exponential(
                line1,
                44..52,
                "mean motion second derivative",
            )?,
            bstar: fields::exponential(line1, 53..61, "bstar drag term")?,
            ephemeris_type: line1.as_bytes()[62] as char,
            element_set_number: fields::integer(line1, 64..68, "element set number")?,
            inclination,
            right_ascension: fields::decimal(line2, 17..25, "right ascension")?,
            eccentricity,
            argument_of_perigee: fields::decimal(line2, 34..42, "argument of perigee")?,
            mean_anomaly: fields::decimal(line2, 43..51, "mean anomaly")?,
            mean_motion,
            revolution_number: fields::integer(line2, 63..68, "revolution number")?,
            checksum_mismatches,
            catalog_number,
        })
    }

    /// Parses two data lines, or a name line followed by two data lines.
    /// A non-blank `name` overrides the name line.
    pub fn from_lines(lines: &[&str], name: Option<&str>) -> Result<Self, TleErrors> {
        match lines {
            [line1, line2] => Self::parse(line1, line2, name),
            [title, line1, line2] => {
                let title = title.trim();
                let title = title.strip_prefix("0 ").unwrap_or(title);
                let name = match name {
                    Some(name) if !name.trim().is_empty() => name,
                    _ => title,
                };
                Self::parse(line1, line2, Some(name))
            }
            _ => Err(TleErrors::MissingLines(lines.len())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn catalog_number(&self) -> &str {
        &self.catalog_number
    }

    /// Numeric catalog number, decoding the Alpha-5 scheme (A0001 = 100001)
    /// used once five digits run out.
    pub fn norad_id(&self) -> Option<u32> {
        let mut chars = self.catalog_number.chars();
        let first = chars.next()?;
        let rest: u32 = chars.as_str().parse().ok()?;
        if let Some(digit) = first.to_digit(10) {
            return Some(digit * 10_000 + rest);
        }
        let letter = first.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() || letter == 'I' || letter == 'O' {
            return None;
        }
        let mut value = letter as u32 - 'A' as u32 + 10;
        if letter > 'I' {
            value -= 1;
        }
        if letter > 'O' {
            value -= 1;
        }
        Some(value * 10_000 + rest)
    }

    pub fn classification(&self) -> char {
        self.classification
    }

    pub fn international_designator(&self) -> &str {
        &self.international_designator
    }

    /// Four-digit launch year from the international designator.
    pub fn launch_year(&self) -> Option<i32> {
        let year: i32 = self.international_designator.get(0..2)?.parse().ok()?;
        Some(if year < 57 { 2000 + year } else { 1900 + year })
    }

    pub fn launch_number(&self) -> Option<u32> {
        self.international_designator.get(2..5)?.parse().ok()
    }

    pub fn launch_piece(&self) -> Option<&str> {
        self.international_designator
            .get(5..)
            .filter(|piece| !piece.is_empty())
    }

    pub fn epoch(&self) -> JulianDate {
        self.epoch
    }

    pub fn epoch_year(&self) -> i32 {
        self.epoch_year
    }

    pub fn epoch_day(&self) -> f64 {
        self.epoch_day
    }

    /// First derivative of mean motion divided by two (rev/day²).
    pub fn mean_motion_dot(&self) -> f64 {
        self.mean_motion_dot
    }

    /// Second derivative of mean motion divided by six (rev/day³).
    pub fn mean_motion_ddot(&self) -> f64 {
        self.mean_motion_ddot
    }

    /// Drag term (1 / Earth radii).
    pub fn bstar(&self) -> f64 {
        self.bstar
    }

    pub fn ephemeris_type(&self) -> char {
        self.ephemeris_type
    }

    pub fn element_set_number(&self) -> u32 {
        self.element_set_number
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn inclination_rad(&self) -> f64 {
        self.inclination * DEG2RAD
    }

    pub fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    pub fn right_ascension_rad(&self) -> f64 {
        self.right_ascension * DEG2RAD
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn argument_of_perigee(&self) -> f64 {
        self.argument_of_perigee
    }

    pub fn argument_of_perigee_rad(&self) -> f64 {
        self.argument_of_perigee * DEG2RAD
    }

    pub fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    pub fn mean_anomaly_rad(&self) -> f64 {
        self.mean_anomaly * DEG2RAD
    }

    /// Mean motion in revolutions per day.
    pub fn mean_motion(&self) -> f64 {
        self.mean_motion
    }

    /// Mean motion in radians per minute.
    pub fn mean_motion_rad_per_minute(&self) -> f64 {
        self.mean_motion * TWO_PI / MINUTES_PER_DAY
    }

    pub fn revolution_number(&self) -> u32 {
        self.revolution_number
    }

    /// Orbital period in minutes, from the mean motion as written.
    pub fn period_minutes(&self) -> f64 {
        MINUTES_PER_DAY / self.mean_motion
    }

    /// Two-body semi-major axis (km) on the WGS-72 ellipsoid, ignoring the
    /// oblateness correction applied by the propagator.
    pub fn semi_major_axis_km(&self) -> f64 {
        let n = self.mean_motion * TWO_PI / SECONDS_PER_DAY;
        (WGS72_MU / (n * n)).cbrt()
    }

    pub fn apogee_altitude_km(&self) -> f64 {
        self.semi_major_axis_km() * (1.0 + self.eccentricity) - WGS72_RADIUS_KM
    }

    pub fn perigee_altitude_km(&self) -> f64 {
        self.semi_major_axis_km() * (1.0 - self.eccentricity) - WGS72_RADIUS_KM
    }

    pub fn checksum_mismatches(&self) -> &[ChecksumMismatch] {
        &self.checksum_mismatches
    }

    pub fn checksums_valid(&self) -> bool {
        self.checksum_mismatches.is_empty()
    }
}

fn check_line(line: &str, number: u8) -> Result<&str, TleErrors> {
    let line = line.trim_end_matches(['\r', '\n']);
    if !line.is_ascii() {
        return Err(TleErrors::NonAscii { line: number });
    }
    if line.len() != TLE_LINE_LENGTH {
        return Err(TleErrors::InvalidLength {
            line: number,
            length: line.len(),
        });
    }
    let found = line.as_bytes()[0] as char;
    if found.to_digit(10) != Some(number as u32) {
        return Err(TleErrors::InvalidLineNumber {
            line: number,
            found,
        });
    }
    Ok(line)
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.catalog_number)?;
        writeln!(f, "  Epoch:           {}", self.epoch)?;
        writeln!(f, "  Inclination:     {:.4} deg", self.inclination)?;
        writeln!(f, "  RAAN:            {:.4} deg", self.right_ascension)?;
        writeln!(f, "  Eccentricity:    {:.7}", self.eccentricity)?;
        writeln!(f, "  Arg of perigee:  {:.4} deg", self.argument_of_perigee)?;
        writeln!(f, "  Mean anomaly:    {:.4} deg", self.mean_anomaly)?;
        writeln!(f, "  Mean motion:     {:.8} rev/day", self.mean_motion)?;
        write!(f, "  BSTAR:           {:e}", self.bstar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use test_case::test_case;

    const ISS_1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS_2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn parses_iss() {
        let elements = OrbitalElements::parse(ISS_1, ISS_2, None).unwrap();
        assert_eq!(elements.name(), "25544");
        assert_eq!(elements.catalog_number(), "25544");
        assert_eq!(elements.norad_id(), Some(25544));
        assert_eq!(elements.classification(), 'U');
        assert_eq!(elements.international_designator(), "98067A");
        assert_eq!(elements.launch_year(), Some(1998));
        assert_eq!(elements.launch_number(), Some(67));
        assert_eq!(elements.launch_piece(), Some("A"));
        assert_eq!(elements.epoch_year(), 2008);
        assert_abs_diff_eq!(elements.epoch_day(), 264.51782528);
        assert_relative_eq!(elements.mean_motion_dot(), -0.00002182);
        assert_abs_diff_eq!(elements.mean_motion_ddot(), 0.0);
        assert_relative_eq!(elements.bstar(), -0.11606e-4, max_relative = 1e-12);
        assert_eq!(elements.ephemeris_type(), '0');
        assert_eq!(elements.element_set_number(), 292);
        assert_abs_diff_eq!(elements.inclination(), 51.6416);
        assert_abs_diff_eq!(elements.right_ascension(), 247.4627);
        assert_abs_diff_eq!(elements.eccentricity(), 0.0006703);
        assert_abs_diff_eq!(elements.argument_of_perigee(), 130.5360);
        assert_abs_diff_eq!(elements.mean_anomaly(), 325.0288);
        assert_abs_diff_eq!(elements.mean_motion(), 15.72125391);
        assert_eq!(elements.revolution_number(), 56353);
        assert!(elements.checksums_valid());
        assert_abs_diff_eq!(elements.period_minutes(), 91.595747, epsilon = 1e-6);
        assert_abs_diff_eq!(elements.semi_major_axis_km(), 6730.9627, epsilon = 1e-3);
        assert_abs_diff_eq!(elements.apogee_altitude_km(), 357.339, epsilon = 1e-3);
        assert_abs_diff_eq!(elements.perigee_altitude_km(), 348.316, epsilon = 1e-3);
        // 2008-09-20 12:25:40.104 UTC
        assert_abs_diff_eq!(elements.epoch().date(), 2454730.01782528, epsilon = 1e-8);
    }

    #[test]
    fn name_resolution() {
        let named = OrbitalElements::parse(ISS_1, ISS_2, Some("ISS (ZARYA)")).unwrap();
        assert_eq!(named.name(), "ISS (ZARYA)");

        let blank = OrbitalElements::parse(ISS_1, ISS_2, Some("   ")).unwrap();
        assert_eq!(blank.name(), "25544");

        let three = OrbitalElements::from_lines(&["0 ISS (ZARYA)   ", ISS_1, ISS_2], None).unwrap();
        assert_eq!(three.name(), "ISS (ZARYA)");

        let overridden =
            OrbitalElements::from_lines(&["ISS (ZARYA)", ISS_1, ISS_2], Some("Station")).unwrap();
        assert_eq!(overridden.name(), "Station");
    }

    #[test]
    fn tolerates_line_endings() {
        let line1 = format!("{}\r\n", ISS_1);
        assert!(OrbitalElements::parse(&line1, ISS_2, None).is_ok());
    }

    #[test]
    fn wrong_line_count() {
        assert_eq!(
            OrbitalElements::from_lines(&[ISS_1], None),
            Err(TleErrors::MissingLines(1))
        );
    }

    #[test_case(&ISS_1[..68], ISS_2, 1; "short first line")]
    #[test_case(ISS_1, "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.721253915635377", 2; "long second line")]
    fn wrong_length(line1: &str, line2: &str, line: u8) {
        assert!(matches!(
            OrbitalElements::parse(line1, line2, None),
            Err(TleErrors::InvalidLength { line: l, .. }) if l == line
        ));
    }

    #[test]
    fn swapped_lines() {
        assert!(matches!(
            OrbitalElements::parse(ISS_2, ISS_1, None),
            Err(TleErrors::InvalidLineNumber { line: 1, found: '2' })
        ));
    }

    #[test]
    fn non_numeric_field() {
        let line2 = ISS_2.replace("51.6416", "51.6X16");
        assert!(matches!(
            OrbitalElements::parse(ISS_1, &line2, None),
            Err(TleErrors::InvalidField { field: "inclination", .. })
        ));

        let line1 = ISS_1.replace("08264.51782528", "08264.5178252Z");
        assert!(matches!(
            OrbitalElements::parse(&line1, ISS_2, None),
            Err(TleErrors::InvalidField { field: "epoch day", .. })
        ));
    }

    #[test]
    fn blank_epoch_year_is_rejected() {
        let line1 = format!("{}  {}", &ISS_1[..18], &ISS_1[20..]);
        assert!(matches!(
            OrbitalElements::parse(&line1, ISS_2, None),
            Err(TleErrors::InvalidField { field: "epoch year", .. })
        ));
    }

    #[test]
    fn out_of_range_elements() {
        let line2 = ISS_2.replace(" 51.6416", "181.6416");
        assert!(matches!(
            OrbitalElements::parse(ISS_1, &line2, None),
            Err(TleErrors::ElementOutOfRange { field: "inclination", .. })
        ));

        let line2 = ISS_2.replace("15.72125391", " 0.00000000");
        assert!(matches!(
            OrbitalElements::parse(ISS_1, &line2, None),
            Err(TleErrors::ElementOutOfRange { field: "mean motion", .. })
        ));
    }

    #[test]
    fn catalog_mismatch() {
        let line2 = ISS_2.replace("25544", "25545");
        assert!(matches!(
            OrbitalElements::parse(ISS_1, &line2, None),
            Err(TleErrors::CatalogMismatch { .. })
        ));
    }

    #[test]
    fn checksum_mismatch_is_reported_not_fatal() {
        let line1 = format!("{}0", &ISS_1[..68]);
        let elements = OrbitalElements::parse(&line1, ISS_2, None).unwrap();
        assert!(!elements.checksums_valid());
        assert_eq!(
            elements.checksum_mismatches(),
            &[ChecksumMismatch {
                line: 1,
                expected: 7,
                found: '0'
            }]
        );
    }

    #[test]
    fn blank_optional_fields() {
        let line1 = "1 11801U          80230.29629788  .01431103  00000-0  14311-1      13";
        let line2 = "2 11801  46.7916 230.4354 7318036  47.4722  10.4117  2.28537848    13";
        let elements = OrbitalElements::parse(line1, line2, None).unwrap();
        assert_eq!(elements.international_designator(), "");
        assert_eq!(elements.launch_year(), None);
        assert_eq!(elements.launch_piece(), None);
        assert_eq!(elements.element_set_number(), 1);
        assert_eq!(elements.revolution_number(), 1);
        assert_relative_eq!(elements.bstar(), 0.014311, max_relative = 1e-12);
        assert_abs_diff_eq!(elements.eccentricity(), 0.7318036);
        assert_eq!(elements.epoch_year(), 1980);
    }

    #[test_case("A0001", Some(100001); "first alpha five")]
    #[test_case("H9999", Some(179999); "before I")]
    #[test_case("J0000", Some(180000); "skips I")]
    #[test_case("P1234", Some(231234); "skips O")]
    #[test_case("Z9999", Some(339999); "last alpha five")]
    #[test_case("I0000", None; "I is not used")]
    fn alpha_five(catalog: &str, expected: Option<u32>) {
        let line1 = ISS_1.replacen("25544", catalog, 1);
        let line2 = ISS_2.replacen("25544", catalog, 1);
        let elements = OrbitalElements::parse(&line1, &line2, None).unwrap();
        assert_eq!(elements.norad_id(), expected);
    }
}
