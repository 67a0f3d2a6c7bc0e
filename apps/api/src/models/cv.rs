use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Attachment name used by `GET /api/download-cv`.
pub const DOWNLOAD_CV_FILENAME: &str = "TheophilusAE_CV.pdf";

/// Bytes escaped when an asset name becomes a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'(')
    .add(b')');

/// The two CV documents offered for direct download from `/public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvKind {
    Creative,
    Ats,
}

impl CvKind {
    pub const ALL: [CvKind; 2] = [CvKind::Creative, CvKind::Ats];

    /// Path of the asset, relative to the public directory.
    pub fn asset_file(self) -> &'static str {
        match self {
            CvKind::Creative => "CV Theophilus Alexander Elvan (1).pdf",
            CvKind::Ats => "Theophilus Alexander Elvan-resume.pdf",
        }
    }

    /// Name the browser saves the file under.
    pub fn download_filename(self) -> &'static str {
        match self {
            CvKind::Creative => "Theophilus-Alexander-Elvan-Creative-CV.pdf",
            CvKind::Ats => "Theophilus-Alexander-Elvan-ATS-CV.pdf",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CvKind::Creative => "Creative CV",
            CvKind::Ats => "ATS CV",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CvKind::Creative => "A visually appealing CV with modern design elements, perfect for creative roles and portfolio presentations.",
            CvKind::Ats => "A clean, structured CV optimized for Applicant Tracking Systems and traditional corporate applications.",
        }
    }
}

/// One entry of `GET /api/cv/options`.
#[derive(Debug, Clone, Serialize)]
pub struct CvOption {
    #[serde(rename = "type")]
    pub kind: CvKind,
    pub title: &'static str,
    pub description: &'static str,
    pub href: String,
    pub filename: &'static str,
}

impl From<CvKind> for CvOption {
    fn from(kind: CvKind) -> Self {
        Self {
            kind,
            title: kind.title(),
            description: kind.description(),
            href: format!(
                "/public/{}",
                utf8_percent_encode(kind.asset_file(), PATH_SEGMENT)
            ),
            filename: kind.download_filename(),
        }
    }
}
