//! Digest selection, printing and timing output

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::algorithm::{NumeralBase, PoxDigest, Version};

/// A digest form the user asked to see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DigestKind {
    /// Byte array (8 x u8)
    Bytes,
    /// Word array (4 x u16)
    Words,
    /// Double array (2 x u32)
    Doubles,
    /// Quad (1 x u64)
    Quad,
    /// Sexagesimal digest (base 60)
    Sex,
    /// Vigesimal digest (base 20)
    Vig,
    /// Hexadecimal digest (base 16)
    Hex,
    /// Tetradecimal digest (base 14)
    Tet,
    /// Duodecimal digest (base 12)
    Duo,
    /// Octal digest (base 8)
    Oct,
    /// Senary digest (base 6)
    Sen,
    /// Binary digest (base 2)
    Bin,
    /// Every integer form: bytes, words, doubles and quad
    Decimal,
    /// Every numeral-string digest
    NonDecimal,
    /// Everything
    All,
}

impl DigestKind {
    fn base(self) -> Option<NumeralBase> {
        match self {
            DigestKind::Sex => Some(NumeralBase::Sexagesimal),
            DigestKind::Vig => Some(NumeralBase::Vigesimal),
            DigestKind::Hex => Some(NumeralBase::Hexadecimal),
            DigestKind::Tet => Some(NumeralBase::Tetradecimal),
            DigestKind::Duo => Some(NumeralBase::Duodecimal),
            DigestKind::Oct => Some(NumeralBase::Octal),
            DigestKind::Sen => Some(NumeralBase::Senary),
            DigestKind::Bin => Some(NumeralBase::Binary),
            _ => None,
        }
    }
}

/// The set of digest forms to print
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub bytes: bool,
    pub words: bool,
    pub doubles: bool,
    pub quad: bool,
    /// Selected bases, in display order
    pub bases: Vec<NumeralBase>,
}

impl Selection {
    /// Union of the requested kinds. Nothing requested means hexadecimal only.
    pub fn from_kinds(kinds: &[DigestKind]) -> Self {
        if kinds.is_empty() {
            return Self::from_kinds(&[DigestKind::Hex]);
        }

        let all = kinds.contains(&DigestKind::All);
        let has = |kind: DigestKind| all || kinds.contains(&kind);
        let decimal = has(DigestKind::Decimal);
        let non_decimal = has(DigestKind::NonDecimal);
        let named = |base: NumeralBase| kinds.iter().any(|kind| kind.base() == Some(base));

        Self {
            bytes: decimal || has(DigestKind::Bytes),
            words: decimal || has(DigestKind::Words),
            doubles: decimal || has(DigestKind::Doubles),
            quad: decimal || has(DigestKind::Quad),
            bases: NumeralBase::ALL
                .into_iter()
                .filter(|&base| non_decimal || named(base))
                .collect(),
        }
    }

    /// Human-readable lines for one digest
    pub fn render(&self, digest: &PoxDigest) -> Vec<String> {
        let mut lines = Vec::new();
        if self.bytes {
            lines.push(format!("Bytes: U8{:?}", digest.bytes));
        }
        if self.words {
            lines.push(format!("Words: U16{:?}", digest.words));
        }
        if self.doubles {
            lines.push(format!("Doubles: U32{:?}", digest.doubles));
        }
        if self.quad {
            lines.push(format!("Quad: U64[{}]", digest.quad));
        }
        for &base in &self.bases {
            lines.push(format!("{}: {}", base_label(base), digest.digest(base)));
        }
        lines
    }

    /// JSON record for one digest, holding only the selected forms
    pub fn report<'a>(
        &self,
        input: Option<&'a str>,
        version: Version,
        digest: &'a PoxDigest,
    ) -> DigestReport<'a> {
        DigestReport {
            input,
            version,
            bytes: self.bytes.then_some(digest.bytes),
            words: self.words.then_some(digest.words),
            doubles: self.doubles.then_some(digest.doubles),
            quad: self.quad.then_some(digest.quad),
            digests: self
                .bases
                .iter()
                .map(|&base| (base.name(), digest.digest(base)))
                .collect(),
        }
    }
}

fn base_label(base: NumeralBase) -> &'static str {
    match base {
        NumeralBase::Sexagesimal => "Sexdigest",
        NumeralBase::Vigesimal => "Vigdigest",
        NumeralBase::Hexadecimal => "Hexdigest",
        NumeralBase::Tetradecimal => "Tetdigest",
        NumeralBase::Duodecimal => "Duodigest",
        NumeralBase::Octal => "Octdigest",
        NumeralBase::Senary => "Sendigest",
        NumeralBase::Binary => "Bindigest",
    }
}

/// Serializable view of one digest
#[derive(Debug, Serialize)]
pub struct DigestReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<&'a str>,
    pub version: Version,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<[u8; 8]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<[u16; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doubles: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quad: Option<u64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub digests: BTreeMap<&'static str, &'a str>,
}

/// Unit a benchmark duration is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TimeUnit {
    /// Nanoseconds
    Ns,
    /// Microseconds
    Us,
    /// Milliseconds
    Ms,
    /// Seconds
    S,
    /// Minutes
    M,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Ns,
        TimeUnit::Us,
        TimeUnit::Ms,
        TimeUnit::S,
        TimeUnit::M,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Ns => "ns",
            TimeUnit::Us => "us",
            TimeUnit::Ms => "ms",
            TimeUnit::S => "s",
            TimeUnit::M => "m",
        }
    }

    /// `elapsed` expressed in this unit
    pub fn scale(self, elapsed: Duration) -> f64 {
        let nanos = elapsed.as_nanos() as f64;
        match self {
            TimeUnit::Ns => nanos,
            TimeUnit::Us => nanos / 1e3,
            TimeUnit::Ms => nanos / 1e6,
            TimeUnit::S => nanos / 1e9,
            TimeUnit::M => nanos / 6e10,
        }
    }
}

/// Requested units in display order, microseconds when none were given
fn selected_units(units: &[TimeUnit]) -> impl Iterator<Item = TimeUnit> + '_ {
    TimeUnit::ALL
        .into_iter()
        .filter(move |unit| units.contains(unit) || (units.is_empty() && *unit == TimeUnit::Us))
}

/// Benchmark line: `| N Message(s) || 1.2345e1us |`
///
/// Durations are shown in scientific notation with four fractional digits.
pub fn format_timing(messages: usize, elapsed: Duration, units: &[TimeUnit]) -> String {
    let mut line = format!("| {} Message(s) ||", messages);
    for unit in selected_units(units) {
        line.push_str(&format!(" {:.4e}{} |", unit.scale(elapsed), unit.suffix()));
    }
    line
}

/// Serializable benchmark timing
#[derive(Debug, Serialize)]
pub struct TimingReport {
    pub messages: usize,
    /// Elapsed time keyed by unit suffix
    pub elapsed: BTreeMap<&'static str, f64>,
}

impl TimingReport {
    pub fn new(messages: usize, elapsed: Duration, units: &[TimeUnit]) -> Self {
        Self {
            messages,
            elapsed: selected_units(units)
                .map(|unit| (unit.suffix(), unit.scale(elapsed)))
                .collect(),
        }
    }
}

/// JSON document for one hashing run
#[derive(Debug, Serialize)]
pub struct HashReport<'a> {
    pub digests: Vec<DigestReport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingReport>,
}

/// Results of hashing a list of messages
#[derive(Debug, Clone, Copy)]
pub struct HashRun<'a> {
    pub version: Version,
    /// Input as given on the command line, one per digest
    pub labels: &'a [String],
    pub digests: &'a [PoxDigest],
    pub elapsed: Duration,
}

/// How a [`HashRun`] is printed
#[derive(Debug, Clone, Default)]
pub struct Output {
    pub selection: Selection,
    pub echo: bool,
    pub json: bool,
    pub header: bool,
    pub show_digests: bool,
    /// Timing units, `None` when timings are not shown
    pub timing: Option<Vec<TimeUnit>>,
}

impl Output {
    /// Full text for a run. In JSON mode the result is a single JSON document.
    pub fn render(&self, run: &HashRun<'_>) -> serde_json::Result<String> {
        if self.json {
            let report = self.json_report(run);
            return serde_json::to_string_pretty(&report);
        }

        let mut lines = Vec::new();
        if self.header {
            let count = run.digests.len();
            let header = format!("PoxHash {} | {} message(s)", run.version, count);
            lines.push(header);
        }
        if self.show_digests {
            for (label, digest) in run.labels.iter().zip(run.digests) {
                if self.echo {
                    lines.push(format!("Arg: {}", label));
                }
                lines.extend(self.selection.render(digest));
                lines.push("----".to_string());
            }
        }
        if let Some(units) = &self.timing {
            lines.push(format_timing(run.digests.len(), run.elapsed, units));
        }
        Ok(lines.join("\n"))
    }

    fn json_report<'a>(&self, run: &HashRun<'a>) -> HashReport<'a> {
        let digests = if self.show_digests {
            run.labels
                .iter()
                .zip(run.digests)
                .map(|(label, digest)| {
                    let input = self.echo.then_some(label.as_str());
                    self.selection.report(input, run.version, digest)
                })
                .collect()
        } else {
            Vec::new()
        };

        let count = run.digests.len();
        HashReport {
            digests,
            timing: self
                .timing
                .as_deref()
                .map(|units| TimingReport::new(count, run.elapsed, units)),
        }
    }
}
