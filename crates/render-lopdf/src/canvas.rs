use crate::setup::PageSetup;
use crate::writer::StreamingPdfWriter;
use crate::xobject::RasterImage;
use docket_layout::{
    Cell, CellAdvance, ImageHandle, LayoutError, PageSurface, PathOp, YAxis,
};
use docket_render_core::utils::{flip_y, get_styled_font_name, to_win_ansi};
use docket_render_core::{RenderError, StandardFont, Unit};
use docket_types::{Alignment, BorderSides, Color, Point};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Object, StringFormat};
use std::io::{Cursor, Seek, Write};
use std::path::Path;

const PDF_VERSION: &str = "1.4";
const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// A `PageSurface` over in-memory lopdf content streams.
///
/// Pages are kept as operation lists until [`LopdfCanvas::finish`], so the
/// total page count can still be substituted into text already drawn.
pub struct LopdfCanvas {
    setup: PageSetup,
    font: StandardFont,
    /// Points per user unit.
    k: f32,
    /// Inner padding left and right of cell text, in user units.
    cell_margin: f32,
    pages: Vec<Vec<Operation>>,
    x: f32,
    y: f32,
    fill_color: Color,
    bold: bool,
    images: Vec<RasterImage>,
    total_pages_alias: Option<String>,
}

impl LopdfCanvas {
    /// Creates an empty document; nothing can be drawn before `begin_page`.
    pub fn new(setup: PageSetup) -> Result<Self, RenderError> {
        setup.validate()?;
        let font = StandardFont::from_family(&setup.font_family).unwrap_or_else(|| {
            log::warn!(
                "No metrics for font family '{}', measuring text as Helvetica",
                setup.font_family
            );
            StandardFont::Helvetica
        });
        let k = setup.unit.scale();
        Ok(Self {
            x: setup.margins.left,
            y: setup.margins.top,
            cell_margin: Unit::Mm.to_points(1.0) / k,
            setup,
            font,
            k,
            pages: Vec::new(),
            fill_color: Color::BLACK,
            bold: false,
            images: Vec::new(),
            total_pages_alias: None,
        })
    }

    /// Text containing `alias` gets it replaced by the final page count.
    pub fn alias_total_pages(&mut self, alias: impl Into<String>) {
        self.total_pages_alias = Some(alias.into());
    }

    pub fn setup(&self) -> &PageSetup {
        &self.setup
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Width of `text` in user units with the current weight.
    pub fn string_width(&self, text: &str) -> f32 {
        self.font.string_width(text, self.bold, self.setup.font_size) / self.k
    }

    /// Decodes an image file once; the handle can be placed on any page.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<ImageHandle, RenderError> {
        let path = path.as_ref();
        let raster = RasterImage::open(path)?;
        log::debug!("Loaded image {} ({}x{} px)", path.display(), raster.width, raster.height);
        Ok(self.register_image(raster))
    }

    pub fn load_image_bytes(&mut self, bytes: &[u8]) -> Result<ImageHandle, RenderError> {
        let raster = RasterImage::from_bytes(bytes)?;
        Ok(self.register_image(raster))
    }

    fn register_image(&mut self, raster: RasterImage) -> ImageHandle {
        let handle = ImageHandle {
            id: self.images.len(),
            pixel_width: raster.width,
            pixel_height: raster.height,
        };
        self.images.push(raster);
        handle
    }

    fn ops(&mut self) -> Result<&mut Vec<Operation>, RenderError> {
        self.pages.last_mut().ok_or(RenderError::NoPage)
    }

    fn pdf_point(&self, p: Point) -> (f32, f32) {
        let flipped = YAxis::BottomUp {
            page_height: self.setup.height,
        }
        .apply(p);
        (flipped.x * self.k, flipped.y * self.k)
    }

    fn fill_color_op(color: Color) -> Operation {
        let [r, g, b] = color.to_unit_rgb();
        Operation::new("rg", vec![r.into(), g.into(), b.into()])
    }

    fn push_line(&mut self, from: Point, to: Point) -> Result<(), RenderError> {
        let (x1, y1) = self.pdf_point(from);
        let (x2, y2) = self.pdf_point(to);
        let ops = self.ops()?;
        ops.push(Operation::new("m", vec![x1.into(), y1.into()]));
        ops.push(Operation::new("l", vec![x2.into(), y2.into()]));
        ops.push(Operation::new("S", vec![]));
        Ok(())
    }

    fn render_cell(&mut self, cell: &Cell<'_>) -> Result<(), RenderError> {
        let (x, y, h) = (self.x, self.y, cell.height);
        let w = if cell.width == 0.0 {
            self.setup.width - self.setup.margins.right - x
        } else {
            cell.width
        };
        let k = self.k;

        if cell.fill || cell.border.is_all() {
            let paint = match (cell.fill, cell.border.is_all()) {
                (true, true) => "B",
                (true, false) => "f",
                _ => "S",
            };
            let bottom = flip_y(y + h, self.setup.height) * k;
            let ops = self.ops()?;
            ops.push(Operation::new("re", vec![(x * k).into(), bottom.into(), (w * k).into(), (h * k).into()]));
            ops.push(Operation::new(paint, vec![]));
        }
        if !cell.border.is_all() && !cell.border.is_none() {
            self.push_partial_border(cell.border, x, y, w, h)?;
        }

        if !cell.text.is_empty() {
            let dx = match cell.align {
                Alignment::Left => self.cell_margin,
                Alignment::Right => w - self.cell_margin - self.string_width(cell.text),
                Alignment::Center => (w - self.string_width(cell.text)) / 2.0,
            };
            let font_size_user = self.setup.font_size / k;
            let baseline = y + 0.5 * h + 0.3 * font_size_user;
            let (tx, ty) = self.pdf_point(Point::new(x + dx, baseline));
            let font_key = if self.bold { BOLD_FONT } else { REGULAR_FONT };
            let size = self.setup.font_size;
            let text = Object::String(to_win_ansi(cell.text), StringFormat::Literal);
            let ops = self.ops()?;
            ops.push(Operation::new("q", vec![]));
            ops.push(Operation::new("g", vec![0.into()]));
            ops.push(Operation::new("BT", vec![]));
            ops.push(Operation::new("Tf", vec![Object::Name(font_key.as_bytes().to_vec()), size.into()]));
            ops.push(Operation::new("Td", vec![tx.into(), ty.into()]));
            ops.push(Operation::new("Tj", vec![text]));
            ops.push(Operation::new("ET", vec![]));
            ops.push(Operation::new("Q", vec![]));
        }

        match cell.advance {
            CellAdvance::Right => self.x += w,
            CellAdvance::NextLine => {
                self.x = self.setup.margins.left;
                self.y += h;
            }
            CellAdvance::Below => self.y += h,
        }
        Ok(())
    }

    fn push_partial_border(&mut self, border: BorderSides, x: f32, y: f32, w: f32, h: f32) -> Result<(), RenderError> {
        if border.left {
            self.push_line(Point::new(x, y), Point::new(x, y + h))?;
        }
        if border.top {
            self.push_line(Point::new(x, y), Point::new(x + w, y))?;
        }
        if border.right {
            self.push_line(Point::new(x + w, y), Point::new(x + w, y + h))?;
        }
        if border.bottom {
            self.push_line(Point::new(x, y + h), Point::new(x + w, y + h))?;
        }
        Ok(())
    }

    fn render_path(&mut self, path: &[PathOp]) -> Result<(), RenderError> {
        let encoded: Vec<Operation> = path
            .iter()
            .map(|op| match *op {
                PathOp::MoveTo(p) => {
                    let (x, y) = self.pdf_point(p);
                    Operation::new("m", vec![x.into(), y.into()])
                }
                PathOp::LineTo(p) => {
                    let (x, y) = self.pdf_point(p);
                    Operation::new("l", vec![x.into(), y.into()])
                }
                PathOp::CurveTo { c1, c2, end } => {
                    let operands = [c1, c2, end]
                        .into_iter()
                        .flat_map(|p| {
                            let (x, y) = self.pdf_point(p);
                            [Object::from(x), Object::from(y)]
                        })
                        .collect();
                    Operation::new("c", operands)
                }
                PathOp::Paint(style) => Operation::new(style.operator(), vec![]),
            })
            .collect();
        self.ops()?.extend(encoded);
        Ok(())
    }

    fn render_image(&mut self, image: &ImageHandle, x: f32, y: f32, width: f32, height: f32) -> Result<(), RenderError> {
        if image.id >= self.images.len() {
            return Err(RenderError::UnknownImage(image.id));
        }
        let (width, height) = match (width == 0.0, height == 0.0) {
            // 96 dpi
            (true, true) => {
                let w = image.pixel_width as f32 * 72.0 / 96.0 / self.k;
                (w, image.height_for_width(w))
            }
            (true, false) => (image.width_for_height(height), height),
            (false, true) => (width, image.height_for_width(width)),
            (false, false) => (width, height),
        };
        let k = self.k;
        let bottom = flip_y(y + height, self.setup.height) * k;
        let name = format!("Im{}", image.id);
        let ops = self.ops()?;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![(width * k).into(), 0.into(), 0.into(), (height * k).into(), (x * k).into(), bottom.into()],
        ));
        ops.push(Operation::new("Do", vec![Object::Name(name.into_bytes())]));
        ops.push(Operation::new("Q", vec![]));
        Ok(())
    }

    fn resources(&self, writer: &mut StreamingPdfWriter<impl Write + Seek>) -> Dictionary {
        let base = self.font.base_name();
        let font = |bold: bool| {
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => get_styled_font_name(base, bold),
                "Encoding" => "WinAnsiEncoding",
            }
        };
        let fonts = dictionary! { REGULAR_FONT => font(false), BOLD_FONT => font(true) };

        let mut xobjects = Dictionary::new();
        for (id, image) in self.images.iter().enumerate() {
            let object_id = writer.buffer_object(image.to_xobject());
            xobjects.set(format!("Im{id}").into_bytes(), object_id);
        }
        dictionary! {
            "ProcSet" => vec!["PDF".into(), "Text".into(), "ImageC".into()],
            "Font" => fonts,
            "XObject" => xobjects,
        }
    }

    /// Writes the document and returns the writer.
    pub fn finish<W: Write + Seek>(self, writer: W) -> Result<W, RenderError> {
        if self.pages.is_empty() {
            return Err(RenderError::NoPage);
        }
        let total = self.pages.len().to_string();
        let mut pdf = StreamingPdfWriter::new(writer, PDF_VERSION)?;
        let resources = self.resources(&mut pdf);
        pdf.set_resources(resources);

        let (width_pt, height_pt) = (self.setup.width * self.k, self.setup.height * self.k);
        for mut operations in self.pages {
            if let Some(alias) = &self.total_pages_alias {
                substitute_alias(&mut operations, alias.as_bytes(), total.as_bytes());
            }
            let content_id = pdf.buffer_content_stream(Content { operations })?;
            pdf.add_page(content_id, width_pt, height_pt);
        }
        pdf.set_info(dictionary! {
            "Producer" => Object::string_literal(concat!("docket ", env!("CARGO_PKG_VERSION"))),
        });

        log::info!("Wrote PDF with {} pages", total);
        Ok(pdf.finish()?)
    }

    pub fn to_bytes(self) -> Result<Vec<u8>, RenderError> {
        Ok(self.finish(Cursor::new(Vec::new()))?.into_inner())
    }
}

fn substitute_alias(operations: &mut [Operation], alias: &[u8], value: &[u8]) {
    if alias.is_empty() {
        return;
    }
    for op in operations.iter_mut().filter(|op| op.operator == "Tj") {
        for operand in &mut op.operands {
            if let Object::String(bytes, _) = operand {
                if let Some(replaced) = replace_bytes(bytes, alias, value) {
                    *bytes = replaced;
                }
            }
        }
    }
}

fn replace_bytes(haystack: &[u8], needle: &[u8], with: &[u8]) -> Option<Vec<u8>> {
    let first = haystack.windows(needle.len()).position(|w| w == needle)?;
    let mut out = haystack[..first].to_vec();
    let mut rest = &haystack[first..];
    while !rest.is_empty() {
        if rest.starts_with(needle) {
            out.extend_from_slice(with);
            rest = &rest[needle.len()..];
        } else {
            out.push(rest[0]);
            rest = &rest[1..];
        }
    }
    Some(out)
}

fn surface_error(err: RenderError) -> LayoutError {
    LayoutError::Surface(err.to_string())
}

impl PageSurface for LopdfCanvas {
    fn begin_page(&mut self) -> Result<(), LayoutError> {
        self.pages.push(Vec::new());
        self.x = self.setup.margins.left;
        self.y = self.setup.margins.top;
        let line_width = self.setup.line_width * self.k;
        let fill = Self::fill_color_op(self.fill_color);
        let ops = self.ops().map_err(surface_error)?;
        ops.push(Operation::new("w", vec![line_width.into()]));
        ops.push(fill);
        log::debug!("Started page {}", self.pages.len());
        Ok(())
    }

    fn page_number(&self) -> usize {
        self.pages.len()
    }

    fn cursor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_x(&mut self, x: f32) {
        self.x = if x >= 0.0 { x } else { self.setup.width + x };
    }

    fn set_y(&mut self, y: f32) {
        self.x = self.setup.margins.left;
        self.y = if y >= 0.0 { y } else { self.setup.height + y };
    }

    fn left_margin(&self) -> f32 {
        self.setup.margins.left
    }

    fn page_break_trigger(&self) -> f32 {
        self.setup.page_break_trigger()
    }

    fn draw_cell(&mut self, cell: &Cell<'_>) -> Result<(), LayoutError> {
        self.render_cell(cell).map_err(surface_error)
    }

    fn line_break(&mut self, height: f32) {
        self.x = self.setup.margins.left;
        self.y += height;
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), LayoutError> {
        self.push_line(from, to).map_err(surface_error)
    }

    fn draw_path(&mut self, ops: &[PathOp]) -> Result<(), LayoutError> {
        self.render_path(ops).map_err(surface_error)
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        if let Some(ops) = self.pages.last_mut() {
            ops.push(Self::fill_color_op(color));
        }
    }

    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    fn is_bold(&self) -> bool {
        self.bold
    }

    fn place_image(
        &mut self,
        image: &ImageHandle,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), LayoutError> {
        self.render_image(image, x, y, width, height).map_err(surface_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_layout::{PaintStyle, RoundedRect, TableRenderer, TableSpec, build_rounded_rect};
    use lopdf::Document;

    fn canvas() -> LopdfCanvas {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut canvas = LopdfCanvas::new(PageSetup::default()).unwrap();
        canvas.begin_page().unwrap();
        canvas
    }

    fn last_ops(canvas: &LopdfCanvas, n: usize) -> Vec<String> {
        let ops = canvas.pages.last().unwrap();
        ops[ops.len() - n..].iter().map(|op| op.operator.clone()).collect()
    }

    fn td_x(canvas: &LopdfCanvas) -> f32 {
        let op = canvas.pages.last().unwrap().iter().rev().find(|op| op.operator == "Td").unwrap();
        op.operands[0].as_float().unwrap()
    }

    fn tj_strings(doc: &Document, page: u32) -> Vec<String> {
        let pages = doc.get_pages();
        let content = doc.get_page_content(pages[&page]).unwrap();
        Content::decode(&content)
            .unwrap()
            .operations
            .into_iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| op.operands.first().and_then(|o| o.as_str().ok()).map(|s| String::from_utf8_lossy(s).into_owned()))
            .collect()
    }

    #[test]
    fn drawing_before_the_first_page_fails() {
        let mut canvas = LopdfCanvas::new(PageSetup::default()).unwrap();
        let err = canvas.draw_cell(&Cell::new(10.0, 5.0, "x")).unwrap_err();
        assert!(matches!(err, LayoutError::Surface(_)));
        assert!(matches!(canvas.to_bytes(), Err(RenderError::NoPage)));
    }

    #[test]
    fn filled_bordered_cell_is_one_rectangle() {
        let mut canvas = canvas();
        canvas.set_cursor(10.0, 40.0);
        canvas
            .draw_cell(&Cell::new(50.0, 5.0, "").border(BorderSides::ALL).fill(true))
            .unwrap();

        assert_eq!(last_ops(&canvas, 2), vec!["re", "B"]);
        assert_eq!(canvas.cursor(), Point::new(60.0, 40.0));
    }

    #[test]
    fn partial_borders_are_separate_strokes() {
        let mut canvas = canvas();
        canvas
            .draw_cell(&Cell::new(50.0, 5.0, "").border(BorderSides::SIDES_AND_BOTTOM))
            .unwrap();

        let strokes = canvas.pages[0].iter().filter(|op| op.operator == "S").count();
        assert_eq!(strokes, 3);
        assert!(!canvas.pages[0].iter().any(|op| op.operator == "re"));
    }

    #[test]
    fn text_alignment_offsets() {
        let mut canvas = canvas();
        let k = Unit::Mm.scale();
        let width = canvas.string_width("100.00");

        canvas.set_cursor(10.0, 40.0);
        canvas.draw_cell(&Cell::new(40.0, 5.0, "100.00")).unwrap();
        assert!((td_x(&canvas) - (11.0 * k)).abs() < 0.01);

        canvas.set_cursor(10.0, 40.0);
        canvas.draw_cell(&Cell::new(40.0, 5.0, "100.00").align(Alignment::Right)).unwrap();
        assert!((td_x(&canvas) - (49.0 - width) * k).abs() < 0.01);

        canvas.set_cursor(10.0, 40.0);
        canvas.draw_cell(&Cell::new(40.0, 5.0, "100.00").align(Alignment::Center)).unwrap();
        assert!((td_x(&canvas) - (10.0 + (40.0 - width) / 2.0) * k).abs() < 0.01);
    }

    #[test]
    fn zero_width_cell_runs_to_the_right_margin() {
        let mut canvas = canvas();
        canvas.set_cursor(30.0, 40.0);
        canvas.draw_cell(&Cell::new(0.0, 5.0, "").fill(true)).unwrap();
        assert_eq!(canvas.cursor().x, 200.0);
    }

    #[test]
    fn negative_coordinates_count_from_the_far_edges() {
        let mut canvas = canvas();
        canvas.set_cursor(-75.0, -15.0);
        assert_eq!(canvas.cursor(), Point::new(135.0, 282.0));
    }

    #[test]
    fn fill_color_is_restated_on_new_pages() {
        let mut canvas = canvas();
        canvas.set_fill_color(Color::rgb(0x94, 0xb8, 0xb8));
        canvas.begin_page().unwrap();
        let rg = canvas.pages[1].iter().find(|op| op.operator == "rg").unwrap();
        let red = rg.operands[0].as_float().unwrap();
        assert!((red - 0x94 as f32 / 255.0).abs() < 1e-4);
    }

    #[test]
    fn rounded_rect_path_is_flipped_into_pdf_space() {
        let mut canvas = canvas();
        let shape = RoundedRect::new(10.0, 45.0, 75.0, 35.0, 2.0, PaintStyle::FillThenStroke);
        canvas
            .draw_path(&build_rounded_rect(&shape, YAxis::TopDown).unwrap())
            .unwrap();

        let ops = &canvas.pages[0];
        let moveto = ops.iter().find(|op| op.operator == "m").unwrap();
        let k = Unit::Mm.scale();
        assert!((moveto.operands[0].as_float().unwrap() - 12.0 * k).abs() < 0.01);
        assert!((moveto.operands[1].as_float().unwrap() - 252.0 * k).abs() < 0.01);
        assert_eq!(ops.iter().filter(|op| op.operator == "c").count(), 4);
        assert_eq!(ops.last().unwrap().operator, "B");
    }

    #[test]
    fn unknown_image_handle_is_rejected() {
        let mut canvas = canvas();
        let bogus = ImageHandle {
            id: 3,
            pixel_width: 1,
            pixel_height: 1,
        };
        assert!(canvas.place_image(&bogus, 10.0, 6.0, 0.0, 25.0).is_err());
    }

    #[test]
    fn alias_is_replaced_with_the_page_count() {
        let mut canvas = canvas();
        canvas.alias_total_pages("{nb}");
        canvas.draw_cell(&Cell::new(0.0, 10.0, "Page 1/{nb}")).unwrap();
        canvas.begin_page().unwrap();
        canvas.draw_cell(&Cell::new(0.0, 10.0, "Page 2/{nb}")).unwrap();
        canvas.begin_page().unwrap();

        let doc = Document::load_mem(&canvas.to_bytes().unwrap()).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
        assert_eq!(tj_strings(&doc, 1), vec!["Page 1/3"]);
        assert_eq!(tj_strings(&doc, 2), vec!["Page 2/3"]);
    }

    #[test]
    fn table_spills_onto_new_pages_in_the_pdf() {
        let mut canvas = canvas();
        let headers = vec!["Item".to_string(), "Amount".to_string()];
        let rows = (0..80).map(|i| vec![format!("Row {i}"), format!("{i}.00")]).collect();
        let columns = vec![
            docket_layout::ColumnSpec::new(150.0, Alignment::Left),
            docket_layout::ColumnSpec::new(40.0, Alignment::Right),
        ];
        let report = TableRenderer::default()
            .render(&mut canvas, Point::new(10.0, 40.0), &TableSpec::new(headers, columns, rows))
            .unwrap();

        assert!(report.page_breaks >= 1);
        let doc = Document::load_mem(&canvas.to_bytes().unwrap()).unwrap();
        assert_eq!(doc.get_pages().len(), report.page_breaks + 1);
        for page in 1..=doc.get_pages().len() as u32 {
            assert_eq!(tj_strings(&doc, page).first().map(String::as_str), Some("Item"));
        }
    }

    #[test]
    fn images_are_written_once_and_drawn_per_placement() {
        use image::{ImageFormat, Rgb, RgbImage};

        let mut png = std::io::Cursor::new(Vec::new());
        RgbImage::from_pixel(8, 4, Rgb([0, 0, 0]))
            .write_to(&mut png, ImageFormat::Png)
            .unwrap();

        let mut canvas = canvas();
        let logo = canvas.load_image_bytes(png.get_ref()).unwrap();
        canvas.place_image(&logo, 10.0, 6.0, 0.0, 25.0).unwrap();
        canvas.begin_page().unwrap();
        canvas.place_image(&logo, 10.0, 6.0, 0.0, 25.0).unwrap();

        let cm = canvas.pages[1].iter().find(|op| op.operator == "cm").unwrap();
        let k = Unit::Mm.scale();
        assert!((cm.operands[0].as_float().unwrap() - 50.0 * k).abs() < 0.01);

        let doc = Document::load_mem(&canvas.to_bytes().unwrap()).unwrap();
        let images = doc
            .objects
            .values()
            .filter(|o| o.as_stream().is_ok_and(|s| s.dict.get(b"Subtype").and_then(|v| v.as_name()).is_ok_and(|n| n == b"Image")))
            .count();
        assert_eq!(images, 1);
    }

    #[test]
    fn missing_image_file_is_an_error() {
        let mut canvas = canvas();
        let dir = tempfile::tempdir().unwrap();
        let err = canvas.load_image(dir.path().join("logo.png")).unwrap_err();
        assert!(matches!(err, RenderError::Image(_)));
    }
}
