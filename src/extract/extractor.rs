use std::fs;

use image::RgbaImage;
use log::{debug, info, warn};

use super::{ExtractConfig, ExtractJob, ExtractReport, JobOutcome, SkipReason, default_jobs};
use crate::error::ExtractError;
use crate::output::save_sprite_image;
use crate::sprite::{load_sheet, trim_sprite};

/// Cuts named sprites out of a sprite sheet and writes each one, trimmed to
/// its visible content, as a PNG.
pub struct SpriteExtractor {
    config: ExtractConfig,
    jobs: Vec<ExtractJob>,
}

impl SpriteExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            config,
            jobs: default_jobs(),
        }
    }

    /// Replace the default explorer/spec jobs
    pub fn jobs(mut self, jobs: Vec<ExtractJob>) -> Self {
        self.jobs = jobs;
        self
    }

    /// Run every job against the source sheet.
    ///
    /// A job whose region is fully transparent is skipped with a warning.
    /// Any other failure stops the run and is returned.
    pub fn run(&self) -> Result<ExtractReport, ExtractError> {
        let sheet = load_sheet(&self.config.source)?;
        let (width, height) = sheet.dimensions();
        info!("Image dimensions: {}x{}", width, height);

        if !self.config.output_dir.exists() {
            fs::create_dir_all(&self.config.output_dir).map_err(|e| ExtractError::OutputDir {
                path: self.config.output_dir.clone(),
                source: e,
            })?;
        }

        let mut outcomes = Vec::with_capacity(self.jobs.len());
        for job in &self.jobs {
            outcomes.push(self.run_job(&sheet, job)?);
        }

        info!("Smart crop completed.");

        Ok(ExtractReport {
            source_width: width,
            source_height: height,
            outcomes,
        })
    }

    fn run_job(&self, sheet: &RgbaImage, job: &ExtractJob) -> Result<JobOutcome, ExtractError> {
        let (width, height) = sheet.dimensions();
        let region = job.rule.region(width, height);
        debug!("{}: region {}", job.name, region);

        let area =
            image::imageops::crop_imm(sheet, region.x, region.y, region.width, region.height)
                .to_image();

        let Some((sprite, bbox)) = trim_sprite(&area, self.config.trim_margin) else {
            warn!("No content found for {} area", job.name);
            return Ok(JobOutcome::Skipped {
                name: job.name.clone(),
                region,
                reason: SkipReason::NoOpaqueContent,
            });
        };
        debug!("{}: content bounds {} within region", job.name, bbox);

        let path = self.config.output_dir.join(&job.file_name);
        save_sprite_image(&sprite, &path, self.config.compress)?;
        info!(
            "Saved {} (Size: {}x{})",
            job.file_name,
            sprite.width(),
            sprite.height()
        );

        Ok(JobOutcome::Saved {
            name: job.name.clone(),
            path,
            region,
            bbox,
            width: sprite.width(),
            height: sprite.height(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::{Rect, RegionRule};
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn write_sheet(dir: &std::path::Path, sheet: &RgbaImage) -> std::path::PathBuf {
        let path = dir.join("sheet.png");
        sheet.save(&path).unwrap();
        path
    }

    #[test]
    fn test_full_lower_left_quadrant() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = RgbaImage::from_fn(1024, 1024, |x, y| {
            if x < 512 && y >= 512 {
                Rgba([(x % 256) as u8, (y % 256) as u8, 7, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        let source = write_sheet(dir.path(), &sheet);
        let out = dir.path().join("out");

        let report = SpriteExtractor::new(ExtractConfig::new(&source, &out))
            .run()
            .unwrap();

        assert_eq!((report.source_width, report.source_height), (1024, 1024));
        let Some(JobOutcome::Saved { region, bbox, .. }) = report.outcome("explorer") else {
            panic!("explorer should be saved");
        };
        assert_eq!(*region, Rect::new(0, 512, 512, 512));
        assert_eq!(*bbox, Rect::new(0, 0, 512, 512));

        let written = image::open(out.join("explorer_m.png")).unwrap().into_rgba8();
        let expected = image::imageops::crop_imm(&sheet, 0, 512, 512, 512).to_image();
        assert_eq!(written, expected);

        assert!(matches!(
            report.outcome("spec"),
            Some(JobOutcome::Skipped {
                reason: SkipReason::NoOpaqueContent,
                ..
            })
        ));
        assert!(!out.join("spec_m.png").exists());
    }

    #[test]
    fn test_bbox_is_relative_to_region() {
        let dir = tempfile::tempdir().unwrap();
        let mut sheet = RgbaImage::new(20, 10);
        // Right half of the lower row starts at (10, 5)
        sheet.put_pixel(12, 6, RED);
        sheet.put_pixel(15, 8, RED);
        // Upper row content must be ignored
        sheet.put_pixel(3, 1, RED);
        let source = write_sheet(dir.path(), &sheet);

        let report = SpriteExtractor::new(ExtractConfig::new(&source, dir.path()))
            .run()
            .unwrap();

        let Some(JobOutcome::Saved {
            region,
            bbox,
            width,
            height,
            ..
        }) = report.outcome("spec")
        else {
            panic!("spec should be saved");
        };
        assert_eq!(*bbox, Rect::new(2, 1, 4, 3));
        assert_eq!((*width, *height), (4, 3));
        assert!(
            Rect::new(0, 0, region.width, region.height).contains(bbox),
            "bbox must stay inside its region"
        );
        assert_eq!(report.saved().count(), 1);
        assert_eq!(report.skipped().count(), 1);
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        let err = SpriteExtractor::new(ExtractConfig::new(dir.path().join("nope.png"), &out))
            .run()
            .unwrap_err();

        assert!(matches!(err, ExtractError::SourceNotFound(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_custom_jobs_and_margin() {
        let dir = tempfile::tempdir().unwrap();
        let mut sheet = RgbaImage::new(8, 8);
        sheet.put_pixel(1, 1, RED);
        let source = write_sheet(dir.path(), &sheet);

        let mut config = ExtractConfig::new(&source, dir.path());
        config.trim_margin = 1;
        let report = SpriteExtractor::new(config)
            .jobs(vec![ExtractJob::new(
                "badge",
                "badge.png",
                RegionRule::UpperLeft,
            )])
            .run()
            .unwrap();

        let Some(JobOutcome::Saved { bbox, .. }) = report.outcome("badge") else {
            panic!("badge should be saved");
        };
        assert_eq!(*bbox, Rect::new(0, 0, 3, 3));
        assert_eq!(report.outcomes.len(), 1);
    }
}
