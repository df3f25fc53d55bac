use redb::{Database, ReadableTable};

use crate::constants::CATEGORY_ALL;
use crate::db::{tables, BINCODE_CONFIG};
use crate::error::Result;
use crate::models::{Template, TemplateRecord};

/// One page of a user's templates plus pagination totals
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePage {
    pub templates: Vec<Template>,
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

impl TemplatePage {
    fn empty(current_page: u64) -> Self {
        Self {
            templates: Vec::new(),
            total_count: 0,
            total_pages: 0,
            current_page,
        }
    }
}

/// Paginated, filtered listing of a user's templates
///
/// Results are ordered by internal id descending (most recently created
/// first); ids are never reused, so the order is stable across pages as long
/// as no writes happen between fetches. The total is counted over the full
/// filtered set independently of the slice, so `total_pages` stays correct on
/// a partial last page and for out-of-range pages.
///
/// An anonymous caller (`author_id = None`) gets an empty page, not an error.
/// Callers validate `page >= 1` and `page_size >= 1` at the boundary.
pub fn list_templates(
    db: &Database,
    author_id: Option<&str>,
    page: u64,
    page_size: u64,
    category: &str,
) -> Result<TemplatePage> {
    let author_id = match author_id {
        Some(id) => id,
        None => return Ok(TemplatePage::empty(page)),
    };

    let read_txn = db.begin_read()?;
    let templates_table = read_txn.open_table(tables::TEMPLATES)?;

    // Saturate on adversarial page numbers: any page past the data is simply
    // out of range and yields an empty slice with totals intact
    let skip = (page - 1).checked_mul(page_size).unwrap_or(u64::MAX);
    let mut templates = Vec::new();
    let mut total_count: u64 = 0;

    for entry in templates_table.iter()?.rev() {
        let (key, value) = entry?;
        let record: TemplateRecord =
            bincode::serde::decode_from_slice(value.value(), BINCODE_CONFIG)?.0;

        if record.author_id != author_id {
            continue;
        }
        if category != CATEGORY_ALL && record.category != category {
            continue;
        }

        if total_count >= skip && (templates.len() as u64) < page_size {
            templates.push(Template::from_record(key.value(), record));
        }
        total_count += 1;
    }

    let total_pages = total_count.div_ceil(page_size);

    Ok(TemplatePage {
        templates,
        total_count,
        total_pages,
        current_page: page,
    })
}
