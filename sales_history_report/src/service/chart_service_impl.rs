use crate::common::*;
use crate::dto::bar_chart_data::*;
use crate::errors::report_error::*;
use crate::traits::service_traits::chart_service::*;
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::register_font;

const BAR_COLOR: RGBColor = RGBColor(76, 114, 176);
const AXIS_COLOR: RGBColor = RGBColor(90, 90, 90);

/* DejaVu Sans, shipped with the binary so rendering never depends on host fonts */
const CHART_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

static CHART_FONT_REGISTRATION: once_lazy<Result<(), String>> = once_lazy::new(|| {
    register_font("sans-serif", FontStyle::Normal, CHART_FONT)
        .map_err(|_| "bundled chart font could not be parsed".to_string())
});

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    width: u32,
    height: u32,
}

#[doc = r#"
    Upper y-limit of a bar chart: the largest value rounded up to the next
    multiple of 5, or raised by 5 when it already is one.

    [3, 8, 12] -> 15, [5, 10] -> 15, [] or [0] -> 5
"#]
pub fn calculate_y_upper_bound(values: &[u64]) -> u64 {
    let max_val: u64 = values.iter().copied().max().unwrap_or(0);
    (max_val / 5 + 1) * 5
}

impl ChartServiceImpl {
    #[doc = "Checks the chart input before any drawing happens"]
    fn validate_chart_data(&self, chart_data: &BarChartData) -> Result<(), ReportError> {
        if chart_data.categories.is_empty() {
            return Err(ReportError::NoData(format!(
                "[ChartServiceImpl->generate_bar_chart] Nothing to draw for '{}'",
                chart_data.title
            )));
        }

        if chart_data.categories.len() != chart_data.values.len() {
            return Err(ReportError::Render(format!(
                "[ChartServiceImpl->generate_bar_chart] Categories and values must have the same length: {} vs {}",
                chart_data.categories.len(),
                chart_data.values.len()
            )));
        }

        if self.width == 0 || self.height == 0 {
            return Err(ReportError::Render(format!(
                "[ChartServiceImpl->generate_bar_chart] Invalid canvas size {}x{}",
                self.width, self.height
            )));
        }

        Ok(())
    }
}

#[doc = "Draws the chart into an RGB buffer and encodes it as PNG. Synchronous (plotters)."]
fn draw_bar_chart_png(chart_data: &BarChartData, width: u32, height: u32) -> anyhow::Result<Vec<u8>> {
    CHART_FONT_REGISTRATION
        .as_ref()
        .map_err(|e| anyhow!("[draw_bar_chart_png] {}", e))?;

    let categories: &[String] = &chart_data.categories;
    let y_upper: u64 = calculate_y_upper_bound(&chart_data.values);

    let mut rgb_buffer: Vec<u8> = vec![0; (width as usize) * (height as usize) * 3];

    {
        let root = BitMapBackend::with_buffer(&mut rgb_buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        /* long product names are turned sideways and shrunk */
        let (x_label_font, x_label_area): (FontDesc, u32) = if chart_data.rotate_labels {
            (
                ("sans-serif", 11)
                    .into_font()
                    .transform(FontTransform::Rotate90),
                120,
            )
        } else {
            (("sans-serif", 14).into_font(), 50)
        };

        let mut chart = ChartBuilder::on(&root)
            .caption(&chart_data.title, ("sans-serif", 24).into_font())
            .margin(20)
            .x_label_area_size(x_label_area)
            .y_label_area_size(60)
            .build_cartesian_2d((0..categories.len()).into_segmented(), 0u64..y_upper)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(chart_data.x_desc.as_str())
            .y_desc(chart_data.y_desc.as_str())
            .x_labels(categories.len())
            .y_labels((y_upper as usize + 1).min(11))
            .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(1))
            .x_label_style(x_label_font)
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(idx) | SegmentValue::Exact(idx) => {
                    categories.get(*idx).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .y_label_formatter(&|y| y.to_string())
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(8)
                .data(
                    chart_data
                        .values
                        .iter()
                        .enumerate()
                        .map(|(idx, value)| (idx, *value)),
                ),
        )?;

        root.present()?;
    }

    let image_buffer: RgbImage = RgbImage::from_raw(width, height, rgb_buffer)
        .ok_or_else(|| anyhow!("[draw_bar_chart_png] RGB buffer does not match {}x{}", width, height))?;

    let mut png_bytes: Vec<u8> = Vec::new();
    image_buffer
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .context("[draw_bar_chart_png] PNG encoding failed")?;

    Ok(png_bytes)
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_bar_chart(&self, chart_data: BarChartData) -> Result<Vec<u8>, ReportError> {
        self.validate_chart_data(&chart_data)?;

        let width: u32 = self.width;
        let height: u32 = self.height;
        let title: String = chart_data.title.clone();

        let handle: tokio::task::JoinHandle<anyhow::Result<Vec<u8>>> =
            tokio::task::spawn_blocking(move || draw_bar_chart_png(&chart_data, width, height));

        let png_bytes: Vec<u8> = handle
            .await
            .map_err(|e| {
                ReportError::Render(format!(
                    "[ChartServiceImpl->generate_bar_chart] blocking task join failed (panic/cancelled): {:?}",
                    e
                ))
            })?
            .map_err(|e| {
                ReportError::Render(format!(
                    "[ChartServiceImpl->generate_bar_chart] drawing/encoding failed: {:?}",
                    e
                ))
            })?;

        info!(
            "Bar chart '{}' generated successfully ({} bytes)",
            title,
            png_bytes.len()
        );

        Ok(png_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_data(categories: Vec<&str>, values: Vec<u64>) -> BarChartData {
        BarChartData::new(
            "Top 10 most selling".to_string(),
            "Plants".to_string(),
            "Total Sold".to_string(),
            categories.into_iter().map(String::from).collect(),
            values,
            true,
        )
    }

    #[test]
    fn upper_bound_rounds_up_to_next_multiple_of_five() {
        assert_eq!(calculate_y_upper_bound(&[3, 8, 12]), 15);
        assert_eq!(calculate_y_upper_bound(&[1]), 5);
        assert_eq!(calculate_y_upper_bound(&[14]), 15);
    }

    #[test]
    fn upper_bound_adds_five_to_exact_multiples() {
        assert_eq!(calculate_y_upper_bound(&[5, 10]), 15);
        assert_eq!(calculate_y_upper_bound(&[0]), 5);
        assert_eq!(calculate_y_upper_bound(&[]), 5);
    }

    #[tokio::test]
    async fn empty_table_fails_fast() {
        let service: ChartServiceImpl = ChartServiceImpl::new(800, 600);

        let result: Result<Vec<u8>, ReportError> =
            service.generate_bar_chart(chart_data(vec![], vec![])).await;

        assert!(matches!(result, Err(ReportError::NoData(_))));
    }

    #[tokio::test]
    async fn mismatched_lengths_are_rejected() {
        let service: ChartServiceImpl = ChartServiceImpl::new(800, 600);

        let result: Result<Vec<u8>, ReportError> = service
            .generate_bar_chart(chart_data(vec!["Rose", "Tulip"], vec![3]))
            .await;

        assert!(matches!(result, Err(ReportError::Render(_))));
    }

    #[tokio::test]
    async fn zero_sized_canvas_is_rejected() {
        let service: ChartServiceImpl = ChartServiceImpl::new(0, 600);

        let result: Result<Vec<u8>, ReportError> = service
            .generate_bar_chart(chart_data(vec!["Rose"], vec![3]))
            .await;

        assert!(matches!(result, Err(ReportError::Render(_))));
    }

    #[tokio::test]
    async fn renders_png_bytes() {
        let service: ChartServiceImpl = ChartServiceImpl::new(640, 480);

        let png_bytes: Vec<u8> = service
            .generate_bar_chart(chart_data(vec!["Rose", "Tulip"], vec![3, 3]))
            .await
            .unwrap();

        assert_eq!(&png_bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn renders_horizontal_labels_at_configured_size() {
        let service: ChartServiceImpl = ChartServiceImpl::new(800, 600);
        let mut monthly: BarChartData = chart_data(
            vec!["Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec"],
            vec![0, 0, 6, 0, 0, 0, 0, 0, 0, 0, 0, 12],
        );
        monthly.rotate_labels = false;

        let png_bytes: Vec<u8> = service.generate_bar_chart(monthly).await.unwrap();
        let decoded: image::DynamicImage = image::load_from_memory(&png_bytes).unwrap();

        assert_eq!((decoded.width(), decoded.height()), (800, 600));
    }
}
