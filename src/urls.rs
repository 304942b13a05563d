//! Hardcoded locations of the supplementary data
//!
//! Every URL is a template with positional `{}` slots, filled in order.

/// A URL pattern with positional `{}` slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlTemplate(&'static str);

impl UrlTemplate {
    pub const fn new(pattern: &'static str) -> Self {
        UrlTemplate(pattern)
    }

    /// Number of `{}` slots in the pattern
    #[cfg(test)]
    pub fn slots(&self) -> usize {
        self.0.matches("{}").count()
    }

    /// Fill the slots left to right. Slots without an argument are kept as `{}`.
    pub fn fill(&self, args: &[&str]) -> String {
        let extra: usize = args.iter().map(|a| a.len()).sum();
        let mut url = String::with_capacity(self.0.len() + extra);
        let mut pieces = self.0.split("{}");
        if let Some(first) = pieces.next() {
            url.push_str(first);
        }
        for (i, piece) in pieces.enumerate() {
            url.push_str(args.get(i).copied().unwrap_or("{}"));
            url.push_str(piece);
        }
        url
    }
}

macro_rules! supp {
    ($path:literal) => {
        concat!("https://artyomovlab.wustl.edu/publications/supp_materials/aging", $path)
    };
}

macro_rules! ucsc {
    ($session:literal) => {
        concat!(
            "https://genome.ucsc.edu/cgi-bin/hgTracks?hgS_doOtherUser=submit&",
            "hgS_otherUserName=Biolabs&hgS_otherUserSessionName=",
            $session
        )
    };
}

// Y20O20 cohort
pub const BEDGZ: UrlTemplate = UrlTemplate::new(supp!("/chipseq/Y20O20/bedgz/{}"));
pub const FASTQC: UrlTemplate = UrlTemplate::new(supp!("/chipseq/Y20O20/qc/fastq/{}/fastqc/"));
pub const PEAKS: UrlTemplate = UrlTemplate::new(supp!("/chipseq/Y20O20/peaks/{}/{}"));
pub const SPAN_MODELS: UrlTemplate = UrlTemplate::new(supp!("/chipseq/Y20O20/span/{}"));
pub const LABELS: UrlTemplate = UrlTemplate::new(supp!("/chipseq/Y20O20/labels/{}_labels.bed"));
pub const Y20O20_BW: UrlTemplate = UrlTemplate::new(supp!("/chipseq/Y20O20/bw/{}"));

/// Peak caller whose output is published
pub const PEAK_CALLER: &str = "span";

// ENCODE CD14 monocytes
pub const ENCODE_BW: UrlTemplate = UrlTemplate::new(supp!("/chipseq/cd14encode/bw/{}_hg19.bw"));
pub const ENCODE_PEAKS: UrlTemplate = UrlTemplate::new(supp!("/chipseq/cd14encode/peaks/{}"));
pub const ENCODE_LABELS: UrlTemplate =
    UrlTemplate::new(supp!("/chipseq/cd14encode/labels/{}_labels.bed"));

pub const GEO: UrlTemplate =
    UrlTemplate::new("https://www.ncbi.nlm.nih.gov/geo/query/acc.cgi?acc={}");

// Explore data sessions
pub const BASIC_UCSC_SESSION: UrlTemplate = UrlTemplate::new(ucsc!("{}%20Aging"));
pub const BASIC_UCSC_SESSION_TXT: UrlTemplate =
    UrlTemplate::new(supp!("/chipseq/sessions/Y20O20/{}_aging_session.txt"));
pub const BASIC_IGV_SESSION: UrlTemplate =
    UrlTemplate::new(supp!("/chipseq/sessions/Y20O20/{}_aging_session.xml"));
pub const EXTENDED_UCSC_SESSION: UrlTemplate = UrlTemplate::new(ucsc!("{}%20Aging%20Extended"));
pub const EXTENDED_UCSC_SESSION_TXT: UrlTemplate =
    UrlTemplate::new(supp!("/chipseq/sessions/Y20O20/{}_aging_session_extended.txt"));
pub const EXTENDED_IGV_SESSION: UrlTemplate =
    UrlTemplate::new(supp!("/chipseq/sessions/Y20O20/{}_aging_session_extended.xml"));

/// IGV and UCSC session locations of one study case group
#[derive(Debug, Clone, Copy)]
pub struct SessionUrls {
    /// IGV/JBR session, filled with the url suffix
    pub igv: UrlTemplate,
    /// UCSC session, filled with the display name
    pub ucsc: UrlTemplate,
    /// UCSC session text file, filled with the url suffix
    pub ucsc_txt: UrlTemplate,
}

pub const ENCODE_SESSIONS: SessionUrls = SessionUrls {
    igv: UrlTemplate::new(supp!("/chipseq/sessions/cd14encode/{}_encode_session.xml")),
    ucsc: UrlTemplate::new(ucsc!("{}%20Encode")),
    ucsc_txt: UrlTemplate::new(supp!("/chipseq/sessions/cd14encode/{}_encode_session.txt")),
};

pub const ULI_SESSIONS: SessionUrls = SessionUrls {
    igv: UrlTemplate::new(supp!("/chipseq/sessions/GSE63523/GSE63523_{}.xml")),
    ucsc: UrlTemplate::new(ucsc!("GSE63523%20{}")),
    ucsc_txt: UrlTemplate::new(supp!("/chipseq/sessions/GSE63523/GSE63523_{}.txt")),
};

pub const MCGILL_SESSIONS: SessionUrls = SessionUrls {
    igv: UrlTemplate::new(supp!("/chipseq/sessions/mcgill/mcgill_igv_session{}.xml")),
    ucsc: UrlTemplate::new(ucsc!("{}")),
    ucsc_txt: UrlTemplate::new(supp!("/chipseq/sessions/mcgill/mcgill_ucsc_session{}.txt")),
};
