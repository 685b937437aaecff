//! Ordering applied after filtering

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::catalog::CatalogRecord;

/// Record field a sort can key on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    /// Case- and accent-insensitive, so "État" sorts with "Etat"
    Title,
    Category,
    Popularity,
    PublishDate,
    Duration,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Category => "category",
            SortField::Popularity => "popularity",
            SortField::PublishDate => "publish_date",
            SortField::Duration => "duration",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "category" => Ok(SortField::Category),
            "popularity" => Ok(SortField::Popularity),
            "publish_date" | "publishDate" | "date" => Ok(SortField::PublishDate),
            "duration" => Ok(SortField::Duration),
            other => Err(format!(
                "Unknown sort field '{other}' (expected id, title, category, popularity, publish_date or duration)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("Unknown sort direction '{other}' (expected asc or desc)")),
        }
    }
}

/// Ordering criterion from the sort dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Compare two records under this spec
    ///
    /// Records without a value for the field go last whatever the
    /// direction. Equal keys compare `Equal` so a stable sort keeps
    /// catalog order.
    pub fn compare(&self, a: &CatalogRecord, b: &CatalogRecord) -> Ordering {
        match self.field {
            SortField::Id => self.directed(a.id.cmp(&b.id)),
            SortField::Title => self.directed(compare_text(&a.title, &b.title)),
            SortField::Category => self.directed(compare_text(&a.category, &b.category)),
            SortField::Popularity => {
                self.compare_present(a.popularity, b.popularity, |x, y| x.cmp(&y))
            }
            SortField::PublishDate => self.compare_present(
                a.publish_date.as_deref().and_then(parse_publish_date),
                b.publish_date.as_deref().and_then(parse_publish_date),
                |x, y| x.cmp(&y),
            ),
            SortField::Duration => self.compare_present(
                a.duration.as_deref().and_then(duration_days),
                b.duration.as_deref().and_then(duration_days),
                |x, y| x.cmp(&y),
            ),
        }
    }

    fn directed(&self, ordering: Ordering) -> Ordering {
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    fn compare_present<T>(
        &self,
        a: Option<T>,
        b: Option<T>,
        cmp: impl Fn(T, T) -> Ordering,
    ) -> Ordering {
        match (a, b) {
            (Some(x), Some(y)) => self.directed(cmp(x, y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}:{}", self.field.as_str(), direction)
    }
}

/// Parses `field` or `field:direction`, e.g. `popularity:desc`
impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(':') {
            Some((field, direction)) => (field, direction.parse()?),
            None => (s, SortDirection::default()),
        };
        Ok(Self::new(field.trim().parse()?, direction))
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Lowercased with diacritics stripped
fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect::<String>()
        .to_lowercase()
}

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Publish dates appear both as ISO (`2024-01-15`) and long French
/// (`10 janvier 2024`). Anything else is treated as missing.
fn parse_publish_date(label: &str) -> Option<NaiveDate> {
    let label = label.trim();
    if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return Some(date);
    }

    let mut parts = label.split_whitespace();
    let day: u32 = parts.next()?.trim_end_matches("er").parse().ok()?;
    let month_name = parts.next()?.to_lowercase();
    let year: i32 = parts.next()?.parse().ok()?;
    let month = FRENCH_MONTHS.iter().position(|m| *m == month_name)? as u32 + 1;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Lower bound of a duration label, in days ("2-3 mois" -> 60)
///
/// Amounts too large to express in days count as missing.
fn duration_days(label: &str) -> Option<u32> {
    let label = label.trim_start();
    let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
    let amount: u32 = digits.parse().ok()?;

    let unit = if label.contains("mois") {
        30
    } else if label.contains("semaine") {
        7
    } else {
        1
    };
    amount.checked_mul(unit)
}
