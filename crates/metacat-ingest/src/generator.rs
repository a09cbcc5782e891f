//! Sample feed generator
//!
//! Produces feeds in the localized source vocabulary, suitable for serving
//! from the simulated remote endpoint or for `check` / `import`.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use metacat_common::vocabulary::{ACTIVE_TOKENS, CATEGORY_TOKENS, IMPORTANCE_TOKENS};
use metacat_common::FileType;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

pub const TITLES: &[&str] = &[
    "Gada pārskats",
    "Projekta plāns",
    "Budžeta tāme",
    "Drošības politika",
    "Personāla rokasgrāmata",
    "IT infrastruktūras audits",
    "Klientu aptaujas rezultāti",
    "Datu aizsardzības noteikumi",
    "Iepirkumu procedūra",
    "Apmācību programma",
    "Kvalitātes vadības sistēma",
    "Risku novērtējums",
    "Stratēģiskais plāns",
    "Iekšējā audita ziņojums",
    "Komunikācijas stratēģija",
];

pub const UNITS: &[&str] = &[
    "Finanšu departaments",
    "IT nodaļa",
    "Personāla nodaļa",
    "Juridiskā nodaļa",
    "Mārketinga nodaļa",
    "Drošības nodaļa",
    "Kvalitātes nodaļa",
    "Projektu vadība",
];

const YEARS: std::ops::RangeInclusive<i32> = 2019..=2026;
const READING_MINUTES: std::ops::RangeInclusive<u32> = 1..=120;

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn date_range() -> Result<(NaiveDate, i64)> {
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).context("invalid start date")?;
    let end = NaiveDate::from_ymd_opt(2026, 1, 1).context("invalid end date")?;
    Ok((start, (end - start).num_days()))
}

fn write_field(writer: &mut Writer<Vec<u8>>, name: &str, value: &str) -> Result<()> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(value))?;
    Ok(())
}

/// Generate a feed of `count` documents.
///
/// Record `i` (1-based) gets url `https://example.com/docs/{i:04}.{file_type}`,
/// so urls are unique within a feed and stable across runs. The same `seed`
/// always yields the same text.
pub fn generate_feed(count: usize, seed: Option<u64>) -> Result<String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (start, span_days) = date_range()?;

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("documents")))?;

    for id in 1..=count {
        let title = *pick(&mut rng, TITLES);
        let year = rng.gen_range(YEARS);
        let unit = *pick(&mut rng, UNITS);
        let created_at = start + Duration::days(rng.gen_range(0..=span_days));
        let file_type = *pick(&mut rng, &FileType::ALL);
        let minutes = rng.gen_range(READING_MINUTES);
        let importance = pick(&mut rng, IMPORTANCE_TOKENS).0;
        let category = pick(&mut rng, CATEGORY_TOKENS).0;
        let active = pick(&mut rng, ACTIVE_TOKENS).0;

        writer.write_event(Event::Start(BytesStart::new("document")))?;
        write_field(&mut writer, "title", &format!("{} {}", title, year))?;
        write_field(
            &mut writer,
            "description",
            &format!(
                "Dokuments nr. {}: {}, sagatavots {}. gadā.",
                id,
                title.to_lowercase(),
                year
            ),
        )?;
        write_field(&mut writer, "responsible_unit", unit)?;
        write_field(&mut writer, "created_at", &created_at.format("%Y-%m-%d").to_string())?;
        write_field(
            &mut writer,
            "url",
            &format!("https://example.com/docs/{:04}.{}", id, file_type),
        )?;
        write_field(&mut writer, "file_type", file_type.as_str())?;
        write_field(&mut writer, "reading_time_minutes", &minutes.to_string())?;
        write_field(&mut writer, "importance", importance)?;
        write_field(&mut writer, "category", category)?;
        write_field(&mut writer, "active", active)?;
        writer.write_event(Event::End(BytesEnd::new("document")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("documents")))?;

    let mut xml = String::from_utf8(writer.into_inner()).context("generated feed is not UTF-8")?;
    xml.push('\n');
    Ok(xml)
}

/// Write `content` to `path`, creating parent directories
pub fn write_feed(path: &Path, content: &str) -> metacat_common::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
