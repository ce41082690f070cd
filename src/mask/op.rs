use crate::buffer::PixelBuffer;
use crate::foundation::error::RemaskResult;
use crate::foundation::geom::Selection;
use crate::mask::chain::Chain;
use crate::mask::channel::ChannelRotate;
use crate::mask::cp::CpMask;
use crate::mask::flip::FlipMask;
use crate::mask::glass::GlassMask;
use crate::mask::meko::MekoMask;
use crate::mask::spiral::FlSpiralMask;
use crate::mask::win::WinMask;
use crate::mask::xor::XorMask;

/// A resolved transform, bound to its configuration.
///
/// Ops hold only immutable configuration (masks, codes); all state lives in
/// the buffer they are applied to. Applying an op then its [`inverse`]
/// reproduces the input byte for byte, over the whole buffer.
///
/// [`inverse`]: MaskOp::inverse
#[derive(Clone, Debug, PartialEq)]
pub enum MaskOp {
    Xor(XorMask),
    Channel(ChannelRotate),
    Flip(FlipMask),
    Glass(GlassMask),
    Win(WinMask),
    FlSpiral(FlSpiralMask),
    Meko(MekoMask),
    Cp(CpMask),
    Chain(Chain),
}

impl MaskOp {
    pub fn apply(&self, buf: &mut PixelBuffer, sel: Selection) -> RemaskResult<()> {
        match self {
            Self::Xor(m) => m.apply(buf, sel),
            Self::Channel(m) => m.apply(buf, sel),
            Self::Flip(m) => m.apply(buf, sel),
            Self::Glass(m) => m.apply(buf, sel),
            Self::Win(m) => m.apply(buf, sel),
            Self::FlSpiral(m) => m.apply(buf, sel),
            Self::Meko(m) => m.apply(buf, sel),
            Self::Cp(m) => m.apply(buf, sel),
            Self::Chain(m) => m.apply(buf, sel),
        }
    }

    /// The exact inverse op. Self-inverse transforms return themselves;
    /// rotations and Meko flip direction; chains invert stage by stage in
    /// reverse order.
    pub fn inverse(&self) -> Self {
        match self {
            Self::Xor(m) => Self::Xor(*m),
            Self::Channel(m) => Self::Channel(m.inverse()),
            Self::Flip(m) => Self::Flip(*m),
            Self::Glass(m) => Self::Glass(*m),
            Self::Win(m) => Self::Win(*m),
            Self::FlSpiral(m) => Self::FlSpiral(*m),
            Self::Meko(m) => Self::Meko(m.inverse()),
            Self::Cp(m) => Self::Cp(m.clone()),
            Self::Chain(m) => Self::Chain(m.inverse()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::Axis;
    use crate::mask::meko::MekoDirection;

    #[test]
    fn inverse_of_inverse_is_original() {
        let ops = vec![
            MaskOp::Xor(XorMask::new(0x80).unwrap()),
            MaskOp::Channel(ChannelRotate::forward()),
            MaskOp::Flip(FlipMask::new(Axis::Vertical)),
            MaskOp::Meko(MekoMask::new(MekoDirection::Plus)),
            MaskOp::Cp(CpMask::new("KEY").unwrap()),
            MaskOp::Chain(Chain::new(vec![
                MaskOp::Channel(ChannelRotate::forward()),
                MaskOp::Flip(FlipMask::new(Axis::Horizontal)),
            ])),
        ];
        for op in ops {
            assert_eq!(op.inverse().inverse(), op);
        }
    }

    #[test]
    fn asymmetric_ops_have_distinct_inverses() {
        let rgb = MaskOp::Channel(ChannelRotate::forward());
        assert_ne!(rgb.inverse(), rgb);
        let meko = MaskOp::Meko(MekoMask::new(MekoDirection::Minus));
        assert_ne!(meko.inverse(), meko);
    }
}
