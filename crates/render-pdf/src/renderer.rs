use crate::content::{PageContext, FONT_BOLD, FONT_REGULAR};
use crate::error::RenderError;
use crate::theme;
use activa_layout::{Block, Card, PlannedBlock, PlannedDocument, CARD_GAP, CARD_HEIGHT, NO_DATA_LABEL};
use activa_types::PageGeometry;
use lopdf::content::Content;
use lopdf::{dictionary, Document, Object, Stream};

/// Height of the banner painted across the top of every page.
const HEADER_BAND: f32 = 90.0;

/// Serializes a planned document to PDF bytes. One content stream per page;
/// the font resources are shared across pages.
pub fn render_document(doc: &PlannedDocument) -> Result<Vec<u8>, RenderError> {
    let mut pdf = Document::with_version("1.7");
    let pages_id = pdf.new_object_id();

    let font_regular = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => font_regular,
            FONT_BOLD => font_bold,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(doc.pages.len());
    for page in &doc.pages {
        let content = render_page(doc, page);
        let content_id = pdf.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.0.into(),
                0.0.into(),
                doc.geometry.width.into(),
                doc.geometry.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );
    let catalog_id = pdf.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    pdf.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)?;
    log::debug!("rendered {} page(s), {} bytes", doc.pages.len(), bytes.len());
    Ok(bytes)
}

fn render_page(doc: &PlannedDocument, blocks: &[PlannedBlock]) -> Content {
    let geom = doc.geometry;
    let mut ctx = PageContext::new();
    for planned in blocks {
        match &planned.block {
            Block::Header => draw_header(&mut ctx, doc),
            Block::CardRow(cards) => draw_card_row(&mut ctx, geom, planned.y, cards),
            Block::SectionTitle(title) => {
                ctx.set_fill(theme::PRIMARY);
                ctx.set_font(FONT_BOLD, 13.0);
                ctx.text(geom.margin, planned.y, title);
            }
            Block::Row { label, value } => {
                ctx.set_fill(theme::TEXT);
                ctx.set_font(FONT_REGULAR, 10.0);
                ctx.text(geom.margin, planned.y, &format!("• {label}"));
                ctx.text_right(geom.width - geom.margin, planned.y, value);
            }
            Block::NoData => {
                ctx.set_fill(theme::TEXT);
                ctx.set_font(FONT_REGULAR, 10.0);
                ctx.text(geom.margin, planned.y, NO_DATA_LABEL);
            }
        }
    }
    ctx.finish()
}

fn draw_header(ctx: &mut PageContext, doc: &PlannedDocument) {
    let geom = doc.geometry;
    ctx.set_fill(theme::PRIMARY);
    ctx.fill_rect(0.0, geom.height - HEADER_BAND, geom.width, HEADER_BAND);
    ctx.set_fill(theme::WHITE);
    ctx.set_font(FONT_BOLD, 18.0);
    ctx.text(geom.margin, geom.height - 50.0, &doc.title);
    ctx.set_font(FONT_REGULAR, 10.0);
    ctx.text(geom.margin, geom.height - 68.0, &doc.generated);
    ctx.text_right(geom.width - geom.margin, geom.height - 68.0, &doc.tagline);
}

fn draw_card_row(ctx: &mut PageContext, geom: PageGeometry, y: f32, cards: &[Card]) {
    let card_width = (geom.content_width() - CARD_GAP) / 2.0;
    for (idx, card) in cards.iter().enumerate() {
        let x = geom.margin + idx as f32 * (card_width + CARD_GAP);
        ctx.set_fill(theme::CARD_FILL);
        ctx.fill_rect(x, y - CARD_HEIGHT, card_width, CARD_HEIGHT);
        ctx.set_fill(theme::ACCENT);
        ctx.set_font(FONT_REGULAR, 9.0);
        ctx.text(x + 12.0, y - 16.0, &card.label);
        ctx.set_fill(theme::TEXT);
        ctx.set_font(FONT_BOLD, 16.0);
        ctx.text(x + 12.0, y - 34.0, &card.value);
    }
}
