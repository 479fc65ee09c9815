//! Wavedeform - render procedural water displacement to heightmap frames
//!
//! A flat grid is deformed by the selected wave variant and every frame is
//! written out as a grayscale PNG.

use std::time::Instant;

use clap::Parser;
use log::{debug, info};

use wavedeform::cli::Args;
use wavedeform::deform::Deformer;
use wavedeform::noise::{NoiseField, OpenSimplexField};
use wavedeform::params::{GridConfig, PreviewConfig};
use wavedeform::preview::render_heightmap;
use wavedeform::surface::SurfaceGrid;
use wavedeform::Error;

fn main() -> Result<(), Error> {
    env_logger::init();

    let args = Args::parse();

    let grid_config = args.grid_config();
    grid_config.validate().map_err(Error::Config)?;
    let preview_config = args.preview_config();
    preview_config.validate().map_err(Error::Config)?;

    let params = args.wave_params();
    info!("Variant: {} at t={:.2}s", params.name(), params.time_s());

    match args.seed {
        Some(seed) => {
            info!("Noise: OpenSimplex (seed {})", seed);
            let deformer = Deformer::with_noise(params, OpenSimplexField::new(seed))
                .with_envelope(args.envelope);
            run(&args, &grid_config, &preview_config, deformer)
        }
        None => {
            info!("Noise: simplex");
            let deformer = Deformer::new(params).with_envelope(args.envelope);
            run(&args, &grid_config, &preview_config, deformer)
        }
    }
}

fn run<N: NoiseField>(
    args: &Args,
    grid_config: &GridConfig,
    preview_config: &PreviewConfig,
    mut deformer: Deformer<N>,
) -> Result<(), Error> {
    let mut grid = SurfaceGrid::new(grid_config);
    info!(
        "Grid: {}x{} vertices, {:.1} units across",
        grid.resolution(),
        grid.resolution(),
        grid_config.extent()
    );

    let total_frames = preview_config.total_frames();
    let mut skipped = 0;

    for frame in 0..total_frames {
        let time_s = preview_config.frame_time(frame);
        deformer.set_time(time_s);

        let start = Instant::now();
        grid.reset();
        let report = deformer.deform(&mut grid.vertices);
        skipped += report.skipped.len();
        debug!("Frame {} deformed in {:?}", frame, start.elapsed());

        let range = preview_config
            .height_range
            .or_else(|| grid.height_range())
            .unwrap_or((0.0, 0.0));
        let path = preview_config.frame_path(frame);
        render_heightmap(&grid, range).save(&path)?;

        info!(
            "Frame {}/{} t={:.3}s heights {:.3}..{:.3} -> {}",
            frame + 1,
            total_frames,
            deformer.params().time_s(),
            range.0,
            range.1,
            path.display()
        );
    }

    if let Some(path) = &args.dump_vertices {
        std::fs::write(path, grid.vertex_bytes())?;
        info!("Wrote {} vertices to {}", grid.vertices.len(), path.display());
    }

    println!(
        "Rendered {} frame(s) of {} waves ({} vertices skipped)",
        total_frames,
        deformer.params().name(),
        skipped
    );
    Ok(())
}
