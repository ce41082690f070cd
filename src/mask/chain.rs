use crate::buffer::PixelBuffer;
use crate::foundation::error::{RemaskError, RemaskResult};
use crate::foundation::geom::Selection;
use crate::mask::op::MaskOp;

/// An ordered composition of transforms applied to the same selection, the
/// output of each stage feeding the next.
///
/// With a grid size set, the selection is shrunk down to the nearest lower
/// multiple before the run, so every stage of a block-based pipeline sees a
/// consistent, pre-quantized region. The caller's selection value is never
/// modified.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    grid: Option<u32>,
    stages: Vec<MaskOp>,
}

impl Chain {
    pub fn new(stages: Vec<MaskOp>) -> Self {
        Self { grid: None, stages }
    }

    pub fn with_grid(grid: u32, stages: Vec<MaskOp>) -> RemaskResult<Self> {
        if grid == 0 {
            return Err(RemaskError::validation("chain grid size must be > 0"));
        }
        Ok(Self {
            grid: Some(grid),
            stages,
        })
    }

    pub fn stages(&self) -> &[MaskOp] {
        &self.stages
    }

    pub fn apply(&self, buf: &mut PixelBuffer, sel: Selection) -> RemaskResult<()> {
        let sel = match self.grid {
            Some(grid) => sel.quantized(grid),
            None => sel,
        };
        if !sel.has_area() {
            return Ok(());
        }
        for stage in &self.stages {
            stage.apply(buf, sel)?;
        }
        Ok(())
    }

    /// The exact inverse chain: stages inverted individually and run in
    /// reverse order.
    pub fn inverse(&self) -> Self {
        Self {
            grid: self.grid,
            stages: self.stages.iter().rev().map(MaskOp::inverse).collect(),
        }
    }
}
