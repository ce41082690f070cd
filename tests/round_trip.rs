use remask::{MaskKind, PixelBuffer, Resolved, Selection};

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn noise_buffer(width: u32, height: u32, seed: u64) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height).unwrap();
    for (i, b) in buf.data.iter_mut().enumerate() {
        *b = mix64(seed ^ i as u64) as u8;
    }
    buf
}

fn arg_for(kind: MaskKind) -> Option<&'static str> {
    kind.requires_code().then_some("ROUND TRIP")
}

fn resolve(kind: MaskKind) -> remask::MaskOp {
    match kind.resolve(arg_for(kind)).unwrap() {
        Resolved::Op(op) => op,
        Resolved::Skip => panic!("{} must resolve", kind.name()),
    }
}

fn resolve_inverse(kind: MaskKind) -> remask::MaskOp {
    match kind.resolve_inverse(arg_for(kind)).unwrap() {
        Resolved::Op(op) => op,
        Resolved::Skip => panic!("{} must resolve", kind.name()),
    }
}

/// Every registered action followed by its registered reverse restores the
/// buffer byte for byte, over the entire buffer, for grid-aligned and for
/// ragged selections alike.
#[test]
fn every_action_round_trips() {
    let selections = [
        Selection::new(16, 16, 64, 48), // aligned to every grid in use
        Selection::new(8, 0, 57, 91),   // ragged; chains quantize it down
    ];
    for kind in MaskKind::ALL {
        for sel in selections {
            let original = noise_buffer(128, 96, 0x9E37_79B9);
            let mut buf = original.clone();

            resolve(kind).apply(&mut buf, sel).unwrap();
            resolve_inverse(kind).apply(&mut buf, sel).unwrap();

            assert_eq!(
                buf,
                original,
                "{} did not round-trip over {sel:?}",
                kind.name()
            );
        }
    }
}

/// The self-inverse actions also round-trip by double application.
#[test]
fn self_inverse_actions_undo_themselves() {
    let self_inverse = [
        MaskKind::Neg,
        MaskKind::Xor,
        MaskKind::HFlip,
        MaskKind::VFlip,
        MaskKind::HGlass,
        MaskKind::VGlass,
        MaskKind::Win,
        MaskKind::Fl,
        MaskKind::Q0,
        MaskKind::Cp,
    ];
    let sel = Selection::new(0, 16, 96, 64);
    for kind in self_inverse {
        let original = noise_buffer(96, 96, 0xDEAD_BEEF);
        let mut buf = original.clone();
        let op = resolve(kind);

        op.apply(&mut buf, sel).unwrap();
        assert_ne!(buf, original, "{} must change the selection", kind.name());
        op.apply(&mut buf, sel).unwrap();
        assert_eq!(buf, original, "{} is not self-inverse", kind.name());
    }
}

/// Actions only ever touch bytes inside the (quantized) selection.
#[test]
fn actions_leave_the_rest_of_the_buffer_alone() {
    let sel = Selection::new(32, 32, 32, 32);
    for kind in MaskKind::ALL {
        let original = noise_buffer(96, 96, 42);
        let mut buf = original.clone();
        resolve(kind).apply(&mut buf, sel).unwrap();

        for y in 0..96 {
            for x in 0..96 {
                let inside = (32..64).contains(&x) && (32..64).contains(&y);
                if !inside {
                    assert_eq!(
                        buf.pixel(x, y),
                        original.pixel(x, y),
                        "{} wrote outside the selection at ({x},{y})",
                        kind.name()
                    );
                }
            }
        }
    }
}

/// q0 is the chain [xor 0xff, vertical glass, horizontal glass]; its
/// registered reverse restores any buffer exactly.
#[test]
fn q0_chain_round_trips() {
    let original = noise_buffer(64, 64, 7);
    let mut buf = original.clone();
    let sel = Selection::new(8, 8, 48, 40);

    resolve(MaskKind::Q0).apply(&mut buf, sel).unwrap();
    assert_ne!(buf, original);
    resolve_inverse(MaskKind::Q0).apply(&mut buf, sel).unwrap();
    assert_eq!(buf, original);
}

/// Resolving the same action twice yields the same transform: applying both
/// to identical buffers produces identical output.
#[test]
fn resolution_is_deterministic() {
    let sel = Selection::new(0, 0, 64, 64);
    for kind in [MaskKind::Cp, MaskKind::MekoP, MaskKind::Fl] {
        let mut a = noise_buffer(64, 64, 1);
        let mut b = a.clone();
        resolve(kind).apply(&mut a, sel).unwrap();
        resolve(kind).apply(&mut b, sel).unwrap();
        assert_eq!(a, b, "{} is not deterministic", kind.name());
    }
}
