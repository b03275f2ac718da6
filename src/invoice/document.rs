use super::settings::InvoiceSettings;
use crate::error::InvoiceError;
use chrono::{Local, NaiveDate};
use docket_layout::{
    add_bold_title, add_text_list_with_labels, rounded_rect_text_box, Alignment, Cell, Color,
    ImageHandle, LabelListStyle, LayoutError, PageSurface, PaintStyle, PathOp, Point, TableRenderer,
    TableReport, TableSpec,
};
use docket_render_lopdf::LopdfCanvas;
use std::io::{Seek, Write};
use std::path::Path;

pub const TOTAL_PAGES_ALIAS: &str = "{nb}";

const LOGO_HEIGHT: f32 = 25.0;
const NO_LOGO_OFFSET: f32 = 15.0;
const INFO_X: f32 = -75.0;
const INFO_Y: f32 = 6.0;
const FOOTER_Y: f32 = -15.0;
const FOOTER_HEIGHT: f32 = 10.0;
const PAYMENT_TITLE_Y: f32 = 40.0;
const PAYMENT_BOX_Y: f32 = 45.0;
const PAYMENT_BOX_WIDTH: f32 = 75.0;
const BILL_TO_X: f32 = 125.0;
const PAYMENT_BOX_RADIUS: f32 = 2.0;
const TOTALS_X: f32 = 130.0;

/// The dates and number printed in every page header.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceHeader {
    pub invoice_number: String,
    pub sent_on: NaiveDate,
    pub due_date: NaiveDate,
}

impl InvoiceHeader {
    pub fn new(invoice_number: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            sent_on: Local::now().date_naive(),
            due_date,
        }
    }

    pub fn sent_on(mut self, date: NaiveDate) -> Self {
        self.sent_on = date;
        self
    }
}

/// An invoice being drawn: a PDF canvas that decorates every page with the
/// invoice header and a page-number footer, and breaks pages on overflow.
pub struct InvoiceDocument {
    canvas: LopdfCanvas,
    settings: InvoiceSettings,
    info: [(&'static str, String); 3],
    logo: Option<ImageHandle>,
    decorating: bool,
}

impl InvoiceDocument {
    /// Validates the settings, loads the logo and opens the first page.
    ///
    /// A logo that cannot be read is skipped with a warning.
    pub fn setup(
        settings: InvoiceSettings,
        header: InvoiceHeader,
        logo: Option<&Path>,
    ) -> Result<Self, InvoiceError> {
        settings.validate()?;
        let mut canvas = LopdfCanvas::new(settings.page_setup())?;
        canvas.alias_total_pages(TOTAL_PAGES_ALIAS);

        let logo = logo.and_then(|path| match canvas.load_image(path) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("Skipping logo {}: {}", path.display(), e);
                None
            }
        });

        let info = [
            ("Sent On:", settings.format_date(header.sent_on)?),
            ("Invoice No:", settings.truncate_invoice_number(&header.invoice_number)),
            ("Due Date:", settings.format_date(header.due_date)?),
        ];

        let mut document = Self {
            canvas,
            settings,
            info,
            logo,
            decorating: false,
        };
        document.begin_page()?;
        Ok(document)
    }

    pub fn settings(&self) -> &InvoiceSettings {
        &self.settings
    }

    pub fn canvas(&self) -> &LopdfCanvas {
        &self.canvas
    }

    /// The "Mail To" and "Bill To" boxes below the page header.
    pub fn add_payment_info<C, B>(&mut self, company: &[C], client: &[B]) -> Result<(), InvoiceError>
    where
        C: AsRef<str>,
        B: AsRef<str>,
    {
        let line_height = self.settings.line_height;
        let left = self.left_margin();
        self.set_fill_color(self.settings.rounded_rect_color);

        add_bold_title(self, left, PAYMENT_TITLE_Y, "Mail To:", line_height)?;
        rounded_rect_text_box(
            self,
            left,
            PAYMENT_BOX_Y,
            PAYMENT_BOX_WIDTH,
            company,
            PAYMENT_BOX_RADIUS,
            PaintStyle::FillThenStroke,
            line_height,
        )?;
        add_bold_title(self, BILL_TO_X, PAYMENT_TITLE_Y, "Bill To:", line_height)?;
        rounded_rect_text_box(
            self,
            BILL_TO_X,
            PAYMENT_BOX_Y,
            PAYMENT_BOX_WIDTH,
            client,
            PAYMENT_BOX_RADIUS,
            PaintStyle::FillThenStroke,
            line_height,
        )?;
        Ok(())
    }

    /// The paginated line-item table, starting at the cursor.
    pub fn add_line_items(&mut self, table: &TableSpec) -> Result<TableReport, InvoiceError> {
        let origin = self.cursor();
        let renderer = TableRenderer::new(self.settings.table_style());
        Ok(renderer.render(self, origin, table)?)
    }

    /// Label/value totals under the table. Labels are filled with the current
    /// fill color, which the table leaves at its band color.
    pub fn add_totals<L, V>(&mut self, entries: &[(L, V)]) -> Result<(), InvoiceError>
    where
        L: AsRef<str>,
        V: AsRef<str>,
    {
        let line_height = self.settings.line_height;
        self.line_break(2.0 * line_height);
        let style = LabelListStyle {
            line_height,
            value_align: Alignment::Right,
            border: true,
            label_fill: true,
            ..LabelListStyle::default()
        };
        let y = self.cursor().y;
        add_text_list_with_labels(self, TOTALS_X, y, entries, &style)?;
        Ok(())
    }

    /// Closes the last page and writes the PDF.
    pub fn finish<W: Write + Seek>(mut self, writer: W) -> Result<W, InvoiceError> {
        self.footer()?;
        let pages = self.canvas.page_count();
        let writer = self.canvas.finish(writer)?;
        log::info!("Invoice finished with {} pages", pages);
        Ok(writer)
    }

    /// Runs `draw` with auto page breaks off, then restores weight and fill.
    fn decorate(
        &mut self,
        draw: impl FnOnce(&mut Self) -> Result<(), LayoutError>,
    ) -> Result<(), LayoutError> {
        let fill = self.canvas.fill_color();
        let bold = self.canvas.is_bold();
        self.decorating = true;
        let drawn = draw(self);
        self.decorating = false;
        self.canvas.set_bold(bold);
        self.canvas.set_fill_color(fill);
        drawn
    }

    fn header(&mut self) -> Result<(), LayoutError> {
        self.decorate(|doc| {
            let Point { x, y } = doc.canvas.cursor();
            match doc.logo {
                Some(logo) => {
                    doc.canvas.place_image(&logo, x, y, 0.0, LOGO_HEIGHT)?;
                    doc.canvas.set_y(y + LOGO_HEIGHT);
                }
                None => doc.canvas.set_y(y + NO_LOGO_OFFSET),
            }
            let style = LabelListStyle {
                line_height: doc.settings.line_height,
                ..LabelListStyle::default()
            };
            add_text_list_with_labels(&mut doc.canvas, INFO_X, INFO_Y, &doc.info, &style)
        })
    }

    fn footer(&mut self) -> Result<(), LayoutError> {
        self.decorate(|doc| {
            doc.canvas.set_y(FOOTER_Y);
            doc.canvas.set_bold(false);
            let label = format!("Page {}/{}", doc.canvas.page_number(), TOTAL_PAGES_ALIAS);
            let cell = Cell::new(0.0, FOOTER_HEIGHT, &label).align(Alignment::Center);
            doc.canvas.draw_cell(&cell)
        })
    }
}

impl PageSurface for InvoiceDocument {
    fn begin_page(&mut self) -> Result<(), LayoutError> {
        if self.canvas.page_number() > 0 {
            self.footer()?;
        }
        self.canvas.begin_page()?;
        self.header()
    }

    fn page_number(&self) -> usize {
        self.canvas.page_number()
    }

    fn cursor(&self) -> Point {
        self.canvas.cursor()
    }

    fn set_x(&mut self, x: f32) {
        self.canvas.set_x(x);
    }

    fn set_y(&mut self, y: f32) {
        self.canvas.set_y(y);
    }

    fn left_margin(&self) -> f32 {
        self.canvas.left_margin()
    }

    fn page_break_trigger(&self) -> f32 {
        self.canvas.page_break_trigger()
    }

    fn draw_cell(&mut self, cell: &Cell<'_>) -> Result<(), LayoutError> {
        let Point { x, y } = self.canvas.cursor();
        if !self.decorating && y + cell.height > self.canvas.page_break_trigger() {
            log::debug!(
                "Cell at y={:.2} overflows page {}, breaking",
                y,
                self.canvas.page_number()
            );
            self.begin_page()?;
            self.canvas.set_x(x);
        }
        self.canvas.draw_cell(cell)
    }

    fn line_break(&mut self, height: f32) {
        self.canvas.line_break(height);
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), LayoutError> {
        self.canvas.draw_line(from, to)
    }

    fn draw_path(&mut self, ops: &[PathOp]) -> Result<(), LayoutError> {
        self.canvas.draw_path(ops)
    }

    fn set_fill_color(&mut self, color: Color) {
        self.canvas.set_fill_color(color);
    }

    fn fill_color(&self) -> Color {
        self.canvas.fill_color()
    }

    fn set_bold(&mut self, bold: bool) {
        self.canvas.set_bold(bold);
    }

    fn is_bold(&self) -> bool {
        self.canvas.is_bold()
    }

    fn place_image(
        &mut self,
        image: &ImageHandle,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), LayoutError> {
        self.canvas.place_image(image, x, y, width, height)
    }
}
