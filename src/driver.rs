use config::{BlurConfig, NeighborSource};
use errors::*;
use pixel_grid::kernel::box_average;
use pixel_grid::{Channels, PixelGrid};
use progress::Progress;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use surface::DisplaySink;

/// Random source used by the command line tool.
pub type BlurRng = Xoshiro256Plus;

pub fn seeded_rng(seed: Option<u64>) -> BlurRng {
    match seed {
        Some(seed) => BlurRng::seed_from_u64(seed),
        None => BlurRng::from_entropy(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlurStats {
    pub passes: u32,
    pub cells_blurred: u64,
    /// Draws that hit a cell already blurred in the same pass.
    pub rejected_draws: u64,
}

/// Runs blur passes over a grid it owns.
///
/// Each pass visits every cell once in random order. A cell is picked by
/// drawing a random coordinate and redrawing while it lands on a cell that
/// was already blurred this pass. Every new color goes to the display sink
/// right after it is written to the grid.
pub struct BlurDriver<R, D> {
    grid: PixelGrid,
    rng: R,
    display: D,
    config: BlurConfig,
    progress: Progress,
    stats: BlurStats,
}

impl<R: Rng, D: DisplaySink> BlurDriver<R, D> {
    pub fn new(grid: PixelGrid, rng: R, display: D, config: BlurConfig) -> Self {
        let progress = Progress::new(grid.len(), config.quiet);
        Self {
            grid,
            rng,
            display,
            config,
            progress,
            stats: BlurStats::default(),
        }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn stats(&self) -> BlurStats {
        self.stats
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    pub fn into_parts(self) -> (PixelGrid, D) {
        (self.grid, self.display)
    }

    /// Runs all configured passes.
    pub fn run(&mut self) -> Result<BlurStats> {
        let passes = self.config.iterations;
        for pass in 0..passes {
            self.progress.start_pass(pass, passes);
            self.run_pass()?;
        }
        if passes > 0 {
            self.progress.finish();
        }
        Ok(self.stats)
    }

    /// Blurs every cell once, then clears the visited flags.
    pub fn run_pass(&mut self) -> Result<()> {
        let snapshot = match self.config.neighbors {
            NeighborSource::Live => None,
            NeighborSource::Snapshot => Some(self.grid.snapshot()),
        };

        let total = self.grid.len();
        let mut done = 0;
        while done < total {
            let (x, y) = self.select_cell()?;
            self.blur_cell(x, y, snapshot.as_ref().map(|s| s.as_slice()))?;
            done += 1;
            self.progress.cell_done(done);
        }

        debug_assert_eq!(self.grid.visited_count(), total);
        self.grid.reset_all_visited();
        self.stats.passes += 1;
        Ok(())
    }

    fn select_cell(&mut self) -> Result<(usize, usize)> {
        let (width, height) = self.grid.dimensions();
        loop {
            let y = self.rng.gen_range(0..height);
            let x = self.rng.gen_range(0..width);
            if !self.grid.is_visited(x, y)? {
                return Ok((x, y));
            }
            self.stats.rejected_draws += 1;
        }
    }

    /// Replaces the color at `(x, y)` with its neighborhood average and marks
    /// the cell visited. Neighbors come from `snapshot` when given, otherwise
    /// from the grid as it currently is.
    pub fn blur_cell(
        &mut self,
        x: usize,
        y: usize,
        snapshot: Option<&[Channels]>,
    ) -> Result<Channels> {
        let average = {
            let grid = &self.grid;
            let info = grid.info();
            match snapshot {
                Some(colors) => box_average(info, x, y, |x2, y2| {
                    info.grid_offset(x2, y2).map(|i| colors[i])
                }),
                None => box_average(info, x, y, |x2, y2| grid.channels(x2, y2)),
            }?
        };

        let color = self.grid.set_channels(x, y, average.channels)?;
        self.grid.mark_visited(x, y)?;
        self.stats.cells_blurred += 1;

        self.display.set_color(x, y, color);
        self.display.redraw();
        Ok(color)
    }
}
