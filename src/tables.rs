//! Generated data tables for the explore, download and study cases pages
//!
//! Each builder emits one `<tr>` per sample, rows joined by newlines, in
//! the sorted order of the sample map.

use crate::config::SampleMap;
use crate::template::{self, Template};
use crate::urls::{self, SessionUrls};
use anyhow::Result;
use log::info;
use std::path::Path;

/// ULI ChIP-seq (GSE63523) cases: display name, url suffix
pub const ULI_CASES: &[(&str, &str)] = &[("H3K27me3", "k27me3"), ("H3K4me3", "k4me3")];

/// McGill cases: display name, url suffix
pub const MCGILL_CASES: &[(&str, &str)] = &[("McGill", ""), ("McGill Input", "_input")];

fn join_rows<'a, I, F>(labels: I, row: F) -> String
where
    I: IntoIterator<Item = &'a String>,
    F: Fn(&str) -> String,
{
    labels
        .into_iter()
        .map(|label| row(label.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn geo_cell(accession: &str) -> String {
    format!("<td><a href=\"{0}\">{1}</a></td>", urls::GEO.fill(&[accession]), accession)
}

// ---------------------------------------------------------------------------
// Explore data
// ---------------------------------------------------------------------------

fn online_row(label: &str) -> String {
    format!(
        concat!(
            "<tr><th>{label}</th>",
            "<td class=\"text-center\"><a href=\"{basic}\" title=\"Basic UCSC custom tracks session\">",
            "Session</a>&nbsp;&sol;&nbsp;",
            "<a href=\"{basic_txt}\" title=\"Basic UCSC custom tracks session file\">Txt</a></td>",
            "<td class=\"text-center\"><a href=\"{extended}\" title=\"Extended UCSC custom tracks session\">",
            "Session</a>&nbsp;&sol;&nbsp;",
            "<a href=\"{extended_txt}\" title=\"Extended UCSC custom tracks session file\">Txt</a></td>",
            "</tr>"
        ),
        label = label,
        basic = urls::BASIC_UCSC_SESSION.fill(&[label]),
        basic_txt = urls::BASIC_UCSC_SESSION_TXT.fill(&[label]),
        extended = urls::EXTENDED_UCSC_SESSION.fill(&[label]),
        extended_txt = urls::EXTENDED_UCSC_SESSION_TXT.fill(&[label]),
    )
}

fn session_file_row(label: &str) -> String {
    format!(
        concat!(
            "<tr><th>{label}</th>",
            "<td class=\"text-center\"><a href=\"{basic}\" title=\"Basic IGV/JBR session file\">xml</a></td>",
            "<td class=\"text-center\"><a href=\"{extended}\" title=\"Extended IGV/JBR session file\">xml</a></td>",
            "</tr>"
        ),
        label = label,
        basic = urls::BASIC_IGV_SESSION.fill(&[label]),
        extended = urls::EXTENDED_IGV_SESSION.fill(&[label]),
    )
}

/// Online UCSC sessions, basic and extended (`@TABLE@`)
pub fn explore_online_rows(samples: &SampleMap) -> String {
    join_rows(samples.keys(), online_row)
}

/// Downloadable IGV/JBR session files (`@TABLE2@`)
pub fn explore_session_rows(samples: &SampleMap) -> String {
    join_rows(samples.keys(), session_file_row)
}

/// Fill the explore data content page `page` from the site folder into the output folder
pub fn generate_explore_page(
    site: &Path,
    out: &Path,
    page: &str,
    samples: &SampleMap,
) -> Result<()> {
    let template_path = site.join(page);
    info!("Creating explore data page {} by template {}", page, template_path.display());

    Template::load(&template_path)?
        .replace(template::TABLE, &explore_online_rows(samples))
        .replace(template::TABLE2, &explore_session_rows(samples))
        .write(&out.join(page))
}

// ---------------------------------------------------------------------------
// Download data
// ---------------------------------------------------------------------------

fn chipseq_row(label: &str) -> String {
    format!(
        concat!(
            "<tr><th>{label}</th>",
            "<td class=\"text-center\"><a href=\"{alignment}\">Alignment</a></td>",
            "<td class=\"text-center\"><a href=\"{qc}\">QC</a></td>",
            "<td class=\"text-center\"><a href=\"{bigwigs}\">BigWigs</a>&nbsp;",
            "<a href=\"explore_data.html\" title=\"Explore data\">",
            "<img class=\"icon-url\" src=\"glyphicons-52-eye-open.png\"/></a></td>",
            "<td class=\"text-center\"><a href=\"{peaks}\">Peaks</a></td>",
            "<td class=\"text-center\"><a href=\"{labels}\">Labels</a></td>",
            "<td class=\"text-center\"><a href=\"{models}\">Models</a>&nbsp;",
            "<a href=\"howto.html\" title=\"Visual peak calling how to\">",
            "<img class=\"icon-url\" src=\"glyphicons-195-question-sign.png\"/></a></td>",
            "</tr>"
        ),
        label = label,
        alignment = urls::BEDGZ.fill(&[label]),
        qc = urls::FASTQC.fill(&[label]),
        bigwigs = urls::Y20O20_BW.fill(&[label]),
        peaks = urls::PEAKS.fill(&[label, urls::PEAK_CALLER]),
        labels = urls::LABELS.fill(&[label]),
        models = urls::SPAN_MODELS.fill(&[label]),
    )
}

fn encode_row(label: &str, accession: &str) -> String {
    format!(
        concat!(
            "<tr><th>{label}</th>",
            "{geo}",
            "<td><a href=\"{bigwigs}\">BigWigs</a></td>",
            "<td><a href=\"{peaks}\">Peaks</a></td>",
            "<td><a href=\"{labels}\">Labels</a></td>",
            "</tr>"
        ),
        label = label,
        geo = geo_cell(accession),
        bigwigs = urls::ENCODE_BW.fill(&[accession]),
        peaks = urls::ENCODE_PEAKS.fill(&[label]),
        labels = urls::ENCODE_LABELS.fill(&[label]),
    )
}

/// Y20O20 ChIP-seq downloads (`@TABLE_CHIPSEQ@`)
pub fn chipseq_rows(samples: &SampleMap) -> String {
    join_rows(samples.keys(), chipseq_row)
}

/// ENCODE downloads keyed by accession (`@TABLE_ENCODE@`)
pub fn encode_rows(samples: &SampleMap) -> String {
    samples
        .iter()
        .map(|(label, accession)| encode_row(label, accession))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fill the download data content page `page` from the site folder into the output folder
pub fn generate_download_data_page(
    site: &Path,
    out: &Path,
    page: &str,
    samples: &SampleMap,
) -> Result<()> {
    let template_path = site.join(page);
    info!("Creating download data page {} by template {}", page, template_path.display());

    Template::load(&template_path)?
        .replace(template::TABLE_CHIPSEQ, &chipseq_rows(samples))
        .replace(template::TABLE_ENCODE, &encode_rows(samples))
        .write(&out.join(page))
}

// ---------------------------------------------------------------------------
// Study cases
// ---------------------------------------------------------------------------

/// One row of a study case table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    /// Row header, also fills the UCSC session slot
    pub name: String,
    /// Fills the IGV and UCSC text file slots
    pub suffix: String,
    /// Adds a GEO column when present
    pub accession: Option<String>,
}

impl SessionEntry {
    fn fixed(cases: &[(&str, &str)]) -> Vec<SessionEntry> {
        cases
            .iter()
            .map(|(name, suffix)| SessionEntry {
                name: name.to_string(),
                suffix: suffix.to_string(),
                accession: None,
            })
            .collect()
    }
}

/// ENCODE entries: one per sample, named and suffixed by its label, with accession
pub fn encode_entries(samples: &SampleMap) -> Vec<SessionEntry> {
    samples
        .iter()
        .map(|(label, accession)| SessionEntry {
            name: label.clone(),
            suffix: label.clone(),
            accession: Some(accession.clone()),
        })
        .collect()
}

pub fn uli_entries() -> Vec<SessionEntry> {
    SessionEntry::fixed(ULI_CASES)
}

pub fn mcgill_entries() -> Vec<SessionEntry> {
    SessionEntry::fixed(MCGILL_CASES)
}

fn study_case_row(entry: &SessionEntry, urls: &SessionUrls) -> String {
    format!(
        concat!(
            "<tr><th>{name}</th>",
            "{geo}",
            "<td class=\"text-center\"><a href=\"{igv}\" title=\"IGV/JBR session file\">xml</a></td>",
            "<td class=\"text-center\"><a href=\"{ucsc}\" title=\"UCSC custom tracks session\">",
            "Session</a>&nbsp;&sol;&nbsp;",
            "<a href=\"{ucsc_txt}\" title=\"UCSC custom tracks session file\">txt</a></td>",
            "</tr>"
        ),
        name = entry.name,
        geo = entry.accession.as_deref().map(geo_cell).unwrap_or_default(),
        igv = urls.igv.fill(&[entry.suffix.as_str()]),
        ucsc = urls.ucsc.fill(&[entry.name.as_str()]),
        ucsc_txt = urls.ucsc_txt.fill(&[entry.suffix.as_str()]),
    )
}

/// Session rows of one study case group, in the order given
pub fn study_case_rows(entries: &[SessionEntry], urls: &SessionUrls) -> String {
    entries
        .iter()
        .map(|entry| study_case_row(entry, urls))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fill the study cases content page `page` from the site folder into the output folder
pub fn generate_study_cases_page(
    site: &Path,
    out: &Path,
    page: &str,
    samples: &SampleMap,
) -> Result<()> {
    let template_path = site.join(page);
    info!("Creating study cases page {} by template {}", page, template_path.display());

    Template::load(&template_path)?
        .replace(
            template::ENCODE_TABLE,
            &study_case_rows(&encode_entries(samples), &urls::ENCODE_SESSIONS),
        )
        .replace(
            template::ULI_TABLE,
            &study_case_rows(&uli_entries(), &urls::ULI_SESSIONS),
        )
        .replace(
            template::MCGILL_TABLE,
            &study_case_rows(&mcgill_entries(), &urls::MCGILL_SESSIONS),
        )
        .write(&out.join(page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_samples() -> SampleMap {
        let mut samples = SampleMap::new();
        samples.insert("H3K4me3".to_string(), "GSM001".to_string());
        samples.insert("H3K27me3".to_string(), "GSM002".to_string());
        samples
    }

    fn row_headers(fragment: &str) -> Vec<&str> {
        fragment
            .lines()
            .map(|row| {
                let start = row.find("<th>").unwrap() + 4;
                let end = row.find("</th>").unwrap();
                &row[start..end]
            })
            .collect()
    }

    fn hrefs(row: &str) -> Vec<&str> {
        row.split("href=\"")
            .skip(1)
            .map(|rest| &rest[..rest.find('"').unwrap()])
            .collect()
    }

    #[test]
    fn test_row_count_matches_samples() {
        let samples = crate::config::Config::default().samples;
        for fragment in [
            explore_online_rows(&samples),
            explore_session_rows(&samples),
            chipseq_rows(&samples),
            encode_rows(&samples),
            study_case_rows(&encode_entries(&samples), &urls::ENCODE_SESSIONS),
        ] {
            assert_eq!(fragment.lines().count(), samples.len());
            assert_eq!(fragment.matches("<tr>").count(), samples.len());
        }
        assert_eq!(study_case_rows(&uli_entries(), &urls::ULI_SESSIONS).lines().count(), 2);
        assert_eq!(study_case_rows(&mcgill_entries(), &urls::MCGILL_SESSIONS).lines().count(), 2);
    }

    #[test]
    fn test_rows_sorted_by_label() {
        let samples = two_samples();
        let sorted = vec!["H3K27me3", "H3K4me3"];
        assert_eq!(row_headers(&explore_online_rows(&samples)), sorted);
        assert_eq!(row_headers(&explore_session_rows(&samples)), sorted);
        assert_eq!(row_headers(&chipseq_rows(&samples)), sorted);
        assert_eq!(row_headers(&encode_rows(&samples)), sorted);
        assert_eq!(
            row_headers(&study_case_rows(&encode_entries(&samples), &urls::ENCODE_SESSIONS)),
            sorted
        );
    }

    #[test]
    fn test_explore_session_hrefs() {
        let rows = explore_session_rows(&two_samples());
        let first = rows.lines().next().unwrap();
        assert_eq!(
            hrefs(first),
            vec![
                "https://artyomovlab.wustl.edu/publications/supp_materials/aging/chipseq/sessions/Y20O20/H3K27me3_aging_session.xml",
                "https://artyomovlab.wustl.edu/publications/supp_materials/aging/chipseq/sessions/Y20O20/H3K27me3_aging_session_extended.xml",
            ]
        );
        assert!(first.contains("title=\"Basic IGV/JBR session file\">xml</a>"));
    }

    #[test]
    fn test_encode_study_case_hrefs() {
        let rows = study_case_rows(&encode_entries(&two_samples()), &urls::ENCODE_SESSIONS);
        let last = rows.lines().last().unwrap();
        assert!(last.starts_with("<tr><th>H3K4me3</th><td><a href="));
        assert!(last.contains(">GSM001</a></td>"));
        assert_eq!(
            hrefs(last),
            vec![
                "https://www.ncbi.nlm.nih.gov/geo/query/acc.cgi?acc=GSM001",
                "https://artyomovlab.wustl.edu/publications/supp_materials/aging/chipseq/sessions/cd14encode/H3K4me3_encode_session.xml",
                "https://genome.ucsc.edu/cgi-bin/hgTracks?hgS_doOtherUser=submit&hgS_otherUserName=Biolabs&hgS_otherUserSessionName=H3K4me3%20Encode",
                "https://artyomovlab.wustl.edu/publications/supp_materials/aging/chipseq/sessions/cd14encode/H3K4me3_encode_session.txt",
            ]
        );
    }

    #[test]
    fn test_empty_map_gives_empty_fragment() {
        assert_eq!(explore_online_rows(&SampleMap::new()), "");
        assert_eq!(encode_rows(&SampleMap::new()), "");
    }

    #[test]
    fn test_encode_rows_link_geo() {
        let rows = encode_rows(&two_samples());
        let first = rows.lines().next().unwrap();
        assert!(first.starts_with("<tr><th>H3K27me3</th>"));
        assert_eq!(
            hrefs(first),
            vec![
                "https://www.ncbi.nlm.nih.gov/geo/query/acc.cgi?acc=GSM002",
                "https://artyomovlab.wustl.edu/publications/supp_materials/aging/chipseq/cd14encode/bw/GSM002_hg19.bw",
                "https://artyomovlab.wustl.edu/publications/supp_materials/aging/chipseq/cd14encode/peaks/H3K27me3",
                "https://artyomovlab.wustl.edu/publications/supp_materials/aging/chipseq/cd14encode/labels/H3K27me3_labels.bed",
            ]
        );
        assert!(first.contains(">GSM002</a>"));
    }

    #[test]
    fn test_explore_online_hrefs() {
        let rows = explore_online_rows(&two_samples());
        let last = rows.lines().last().unwrap();
        assert_eq!(
            hrefs(last),
            vec![
                urls::BASIC_UCSC_SESSION.fill(&["H3K4me3"]),
                urls::BASIC_UCSC_SESSION_TXT.fill(&["H3K4me3"]),
                urls::EXTENDED_UCSC_SESSION.fill(&["H3K4me3"]),
                urls::EXTENDED_UCSC_SESSION_TXT.fill(&["H3K4me3"]),
            ]
        );
    }

    #[test]
    fn test_chipseq_cross_links() {
        let rows = chipseq_rows(&two_samples());
        let first = rows.lines().next().unwrap();
        let links = hrefs(first);
        assert_eq!(links.len(), 8);
        assert_eq!(links[3], "explore_data.html");
        assert_eq!(links[4], urls::PEAKS.fill(&["H3K27me3", "span"]));
        assert_eq!(links[7], "howto.html");
    }

    #[test]
    fn test_chipseq_icons_ship_with_site() {
        let site = Path::new(env!("CARGO_MANIFEST_DIR")).join("site");
        let rows = chipseq_rows(&two_samples());
        let icons: Vec<&str> = rows
            .lines()
            .next()
            .unwrap()
            .split("src=\"")
            .skip(1)
            .map(|rest| &rest[..rest.find('"').unwrap()])
            .collect();
        assert_eq!(icons.len(), 2);
        for icon in icons {
            assert!(site.join(icon).is_file(), "{} missing from site/", icon);
            assert!(crate::workspace::is_static_asset(icon));
        }
    }

    #[test]
    fn test_study_case_geo_column_only_for_encode() {
        let samples = two_samples();
        let encode = study_case_rows(&encode_entries(&samples), &urls::ENCODE_SESSIONS);
        assert!(encode.lines().all(|row| row.contains("acc.cgi?acc=GSM00")));

        let uli = study_case_rows(&uli_entries(), &urls::ULI_SESSIONS);
        assert!(!uli.contains("acc.cgi"));
        let first = uli.lines().next().unwrap();
        assert_eq!(
            hrefs(first),
            vec![
                urls::ULI_SESSIONS.igv.fill(&["k27me3"]),
                urls::ULI_SESSIONS.ucsc.fill(&["H3K27me3"]),
                urls::ULI_SESSIONS.ucsc_txt.fill(&["k27me3"]),
            ]
        );
    }

    #[test]
    fn test_mcgill_rows_keep_given_order() {
        let rows = study_case_rows(&mcgill_entries(), &urls::MCGILL_SESSIONS);
        assert_eq!(row_headers(&rows), vec!["McGill", "McGill Input"]);
        assert!(rows.contains("mcgill_ucsc_session_input.txt"));
        assert!(rows.contains("hgS_otherUserSessionName=McGill Input\""));
    }

    #[test]
    fn test_generate_explore_page() {
        let site = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::write(
            site.path().join("_explore_data.html"),
            "<table>@TABLE@</table>\n<table>@TABLE2@</table>",
        )
        .unwrap();

        generate_explore_page(site.path(), out.path(), "_explore_data.html", &two_samples())
            .unwrap();

        let html = std::fs::read_to_string(out.path().join("_explore_data.html")).unwrap();
        assert!(!html.contains("@TABLE"));
        assert_eq!(html.matches("<tr>").count(), 4);
    }

    #[test]
    fn test_generate_study_cases_page() {
        let site = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::write(
            site.path().join("_study_cases.html"),
            "@ENCODE_TABLE@\n@ULI_TABLE@\n@MCGILL_TABLE@",
        )
        .unwrap();

        generate_study_cases_page(site.path(), out.path(), "_study_cases.html", &two_samples())
            .unwrap();

        let html = std::fs::read_to_string(out.path().join("_study_cases.html")).unwrap();
        assert!(Template::from_text("x", html.as_str()).unresolved().is_empty());
        assert_eq!(html.lines().count(), 6);
    }

    #[test]
    fn test_generate_download_missing_template() {
        let site = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let result = generate_download_data_page(
            site.path(),
            out.path(),
            "_download_data.html",
            &two_samples(),
        );
        assert!(result.is_err());
        assert!(!out.path().join("_download_data.html").exists());
    }
}
