use framecurve::{Anim, Evaluator, FrameIndex, PropertySheet, stagger};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/title_card.json");
    let mut sheet = PropertySheet::from_json_str(s)?;

    let fade_in = Anim::keyframes(vec![0.0, 12.0], vec![0.0, 1.0])?;
    for (i, anim) in stagger(&fade_in, 3, 4).into_iter().enumerate() {
        sheet = sheet.with_property(format!("bullet{i}.opacity"), anim);
    }

    for f in [0i64, 5, 10, 20, 30, 59] {
        let r = Evaluator::eval_frame(&sheet, FrameIndex(f))?;
        println!("frame {f} ({:.3}s):", r.seconds);
        for (name, v) in &r.values {
            println!("  {name:<20} {v:.4}");
        }
    }

    Ok(())
}
