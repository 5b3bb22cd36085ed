use criterion::{criterion_group, criterion_main, Criterion};

static INPUT: &str = "
The scanner 👍 walks every code point 👨‍👩‍👧‍👦 once, holding 🐕 matches back until the next ❤️ character
shows 🤷‍♀️ whether a joiner 👨‍👩🏿‍👧🏻‍👦🏾 continues the sequence. Most text 😁 has few 🦋 emoji,
so 🇩🇪 the 🏴‍☠️ common path is a failed 🐈‍⬛ lookup on the first 🤜🏿 code point. Skin tones 👍🏻 and
hair 👨🏿‍🦰 styles ✨ attach to 🐻‍❄️ their base, keycaps 1️⃣ #️⃣ and flags 🇺🇸🇯🇵 are 🏳️‍🌈 sequences too.
";

fn criterion_benchmark(c: &mut Criterion) {
    assert_eq!(emoji::emoji_count(INPUT, false), emoji::emoji_list(INPUT).len());

    let mut g = c.benchmark_group("scan");
    g.bench_with_input("emoji_list", INPUT, |b, x| b.iter(|| emoji::emoji_list(x).len()));
    g.bench_with_input("analyze", INPUT, |b, x| b.iter(|| emoji::analyze(x, false, true).len()));
    g.bench_with_input("demojize", INPUT, |b, x| b.iter(|| emoji::demojize(x)));
    g.finish();

    let shortcodes = emoji::demojize(INPUT);

    let mut g = c.benchmark_group("emojize");
    g.bench_with_input("default", &shortcodes, |b, x| b.iter(|| emoji::emojize(x)));
    g.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
