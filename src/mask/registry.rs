use crate::foundation::error::{RemaskError, RemaskResult};
use crate::mask::Axis;
use crate::mask::chain::Chain;
use crate::mask::channel::ChannelRotate;
use crate::mask::consts::{GRID_SIZE, GRID_SIZE_DOUBLE, NEG, XOR};
use crate::mask::cp::CpMask;
use crate::mask::flip::FlipMask;
use crate::mask::glass::GlassMask;
use crate::mask::meko::{MekoDirection, MekoMask};
use crate::mask::op::MaskOp;
use crate::mask::spiral::FlSpiralMask;
use crate::mask::win::WinMask;
use crate::mask::xor::XorMask;

/// The closed set of registered actions, keyed by their stable names.
///
/// This is the action registry: every kind resolves to its transform via
/// [`MaskKind::resolve`], and to the exact inverse via
/// [`MaskKind::resolve_inverse`]. The enum replaces a by-name lookup so the
/// forward/reverse pairing is checked exhaustively at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskKind {
    Neg,
    Xor,
    Rgb,
    HFlip,
    VFlip,
    HGlass,
    VGlass,
    Win,
    Fl,
    MekoM,
    MekoP,
    Q0,
    Cp,
}

/// Outcome of resolving an action: a runnable op, or an explicit signal
/// that nothing should run (and nothing be recorded in history).
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    Op(MaskOp),
    /// The action was cancelled before it had the argument it needs (a `cp`
    /// with no code). Callers must not schedule anything for it.
    Skip,
}

impl MaskKind {
    pub const ALL: [MaskKind; 13] = [
        MaskKind::Neg,
        MaskKind::Xor,
        MaskKind::Rgb,
        MaskKind::HFlip,
        MaskKind::VFlip,
        MaskKind::HGlass,
        MaskKind::VGlass,
        MaskKind::Win,
        MaskKind::Fl,
        MaskKind::MekoM,
        MaskKind::MekoP,
        MaskKind::Q0,
        MaskKind::Cp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Neg => "neg",
            Self::Xor => "xor",
            Self::Rgb => "rgb",
            Self::HFlip => "hflip",
            Self::VFlip => "vflip",
            Self::HGlass => "hglass",
            Self::VGlass => "vglass",
            Self::Win => "win",
            Self::Fl => "fl",
            Self::MekoM => "mekom",
            Self::MekoP => "mekop",
            Self::Q0 => "q0",
            Self::Cp => "cp",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Whether resolving this action needs a code argument.
    pub fn requires_code(self) -> bool {
        matches!(self, Self::Cp)
    }

    /// Resolve to the forward transform.
    ///
    /// `arg` is the action's extra argument (only `cp` takes one, its
    /// code). A `cp` resolved without a code yields [`Resolved::Skip`]: the
    /// prompt was cancelled and the transform must never run with an
    /// undefined code.
    pub fn resolve(self, arg: Option<&str>) -> RemaskResult<Resolved> {
        if arg.is_some() && !self.requires_code() {
            return Err(RemaskError::validation(format!(
                "action '{}' takes no argument",
                self.name()
            )));
        }

        let op = match self {
            Self::Neg => MaskOp::Xor(XorMask::new(NEG as u32)?),
            Self::Xor => MaskOp::Xor(XorMask::new(XOR as u32)?),
            Self::Rgb => MaskOp::Channel(ChannelRotate::forward()),
            Self::HFlip => MaskOp::Flip(FlipMask::new(Axis::Horizontal)),
            Self::VFlip => MaskOp::Flip(FlipMask::new(Axis::Vertical)),
            Self::HGlass => MaskOp::Chain(Chain::with_grid(
                GRID_SIZE,
                vec![MaskOp::Glass(GlassMask::new(Axis::Horizontal))],
            )?),
            Self::VGlass => MaskOp::Chain(Chain::with_grid(
                GRID_SIZE,
                vec![MaskOp::Glass(GlassMask::new(Axis::Vertical))],
            )?),
            Self::Win => MaskOp::Chain(Chain::with_grid(
                GRID_SIZE_DOUBLE,
                vec![MaskOp::Win(WinMask)],
            )?),
            Self::Fl => MaskOp::Chain(Chain::with_grid(
                GRID_SIZE,
                vec![MaskOp::FlSpiral(FlSpiralMask)],
            )?),
            Self::MekoM => MaskOp::Chain(Chain::with_grid(
                GRID_SIZE_DOUBLE,
                vec![MaskOp::Meko(MekoMask::new(MekoDirection::Minus))],
            )?),
            Self::MekoP => MaskOp::Chain(Chain::with_grid(
                GRID_SIZE_DOUBLE,
                vec![MaskOp::Meko(MekoMask::new(MekoDirection::Plus))],
            )?),
            Self::Q0 => MaskOp::Chain(Chain::with_grid(
                GRID_SIZE,
                vec![
                    MaskOp::Xor(XorMask::new(NEG as u32)?),
                    MaskOp::Glass(GlassMask::new(Axis::Vertical)),
                    MaskOp::Glass(GlassMask::new(Axis::Horizontal)),
                ],
            )?),
            Self::Cp => match arg {
                None => {
                    tracing::debug!("cp resolved without a code, skipping");
                    return Ok(Resolved::Skip);
                }
                Some(code) => MaskOp::Chain(Chain::with_grid(
                    GRID_SIZE_DOUBLE,
                    vec![MaskOp::Cp(CpMask::new(code)?)],
                )?),
            },
        };
        Ok(Resolved::Op(op))
    }

    /// Resolve to the transform that exactly undoes this action.
    ///
    /// Self-inverse actions reuse the forward entry; `rgb` and the two meko
    /// directions map to their distinct partners; chains re-sequence their
    /// stages in inverse order.
    pub fn resolve_inverse(self, arg: Option<&str>) -> RemaskResult<Resolved> {
        Ok(match self.resolve(arg)? {
            Resolved::Op(op) => Resolved::Op(op.inverse()),
            Resolved::Skip => Resolved::Skip,
        })
    }
}
