//! End-to-end editing sessions: actions resolved through the registry,
//! applied across frame sequences by the batch processor, recorded in
//! history, and undone losslessly.

use remask::{
    CancelToken, History, HistoryEntry, MaskKind, PixelBuffer, Resolved, Selection,
    process_frames,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn video(frames: usize, width: u32, height: u32) -> Vec<PixelBuffer> {
    (0..frames)
        .map(|f| {
            let mut buf = PixelBuffer::new(width, height).unwrap();
            for (i, b) in buf.data.iter_mut().enumerate() {
                *b = mix64((f as u64) << 32 | i as u64) as u8;
            }
            buf
        })
        .collect()
}

fn apply_entry(frames: Vec<PixelBuffer>, entry: &HistoryEntry, undo: bool) -> Vec<PixelBuffer> {
    let resolved = if undo {
        entry.kind.resolve_inverse(entry.arg.as_deref()).unwrap()
    } else {
        entry.kind.resolve(entry.arg.as_deref()).unwrap()
    };
    let Resolved::Op(op) = resolved else {
        panic!("entries in history always resolve");
    };
    process_frames(frames, entry.selection, op, CancelToken::new(), |_, _| {})
        .unwrap()
        .expect("not cancelled")
}

#[test]
fn apply_undo_redo_cycle_is_lossless_across_frames() {
    init_tracing();
    let original = video(6, 64, 48);
    let sel = Selection::new(16, 0, 48, 48);

    let mut history = History::new();
    let entries = [
        HistoryEntry::new(MaskKind::Neg, sel),
        HistoryEntry::new(MaskKind::MekoM, sel),
        HistoryEntry::with_arg(MaskKind::Cp, sel, "SESSION KEY"),
        HistoryEntry::new(MaskKind::Fl, sel),
    ];

    // Apply all four actions in order, recording each.
    let mut frames = original.clone();
    for entry in &entries {
        frames = apply_entry(frames, entry, false);
        history.add(entry.clone());
    }
    assert_ne!(frames, original);

    // Undo everything; the frame set must come back byte for byte.
    while let Some(entry) = history.backward() {
        frames = apply_entry(frames, &entry, true);
    }
    assert_eq!(frames, original);

    // Redo everything and undo once more; still lossless.
    while let Some(entry) = history.forward() {
        frames = apply_entry(frames, &entry, false);
    }
    assert_ne!(frames, original);
    while let Some(entry) = history.backward() {
        frames = apply_entry(frames, &entry, true);
    }
    assert_eq!(frames, original);
}

#[test]
fn undo_then_new_action_discards_the_redo_branch() {
    let original = video(2, 32, 32);
    let sel = Selection::new(0, 0, 32, 32);
    let mut history = History::new();

    let a = HistoryEntry::new(MaskKind::Neg, sel);
    let b = HistoryEntry::new(MaskKind::Rgb, sel);
    let c = HistoryEntry::new(MaskKind::HFlip, sel);

    let mut frames = apply_entry(original.clone(), &a, false);
    history.add(a);
    frames = apply_entry(frames, &b, false);
    history.add(b);

    // Undo B, then apply C: the branch with B is gone.
    let undone = history.backward().unwrap();
    assert_eq!(undone.kind, MaskKind::Rgb);
    frames = apply_entry(frames, &undone, true);
    frames = apply_entry(frames, &c, false);
    history.add(c);

    assert_eq!(history.forward(), None);
    let replay = history.backward().unwrap();
    assert_eq!(replay.kind, MaskKind::HFlip);

    // The frame state equals A then C applied to the original.
    let mut expected = apply_entry(original, &HistoryEntry::new(MaskKind::Neg, sel), false);
    expected = apply_entry(expected, &HistoryEntry::new(MaskKind::HFlip, sel), false);
    assert_eq!(frames, expected);
}

#[test]
fn cancelled_cp_is_never_scheduled_or_recorded() {
    let mut history = History::new();

    // The host's prompt was cancelled: no code. The registry signals an
    // explicit skip; nothing runs, nothing is recorded.
    match MaskKind::Cp.resolve(None).unwrap() {
        Resolved::Skip => {}
        Resolved::Op(_) => panic!("cp without a code must not produce a transform"),
    }
    assert!(history.is_empty());
    assert_eq!(history.backward(), None);
}

#[test]
fn batch_cancellation_commits_nothing() {
    let original = video(10, 32, 32);
    let sel = Selection::new(0, 0, 32, 32);
    let Resolved::Op(op) = MaskKind::Neg.resolve(None).unwrap() else {
        panic!("neg resolves without an argument");
    };

    let token = CancelToken::new();
    let mut calls = 0;
    let cancel_at = token.clone();
    let result = process_frames(original, sel, op, token, |_, _| {
        calls += 1;
        // Cancel mid-run from the progress callback, as a UI would.
        cancel_at.cancel();
    })
    .unwrap();

    assert!(result.is_none(), "cancelled batch must not commit frames");
    assert_eq!(calls, 1);
}
