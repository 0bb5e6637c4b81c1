use criterion::{Criterion, black_box, criterion_group, criterion_main};
use quotex::{ModeFlags, compile_pattern};

fn bench_plain_regex(c: &mut Criterion) {
    let input = "how (much) wood would a woodchuck chuck? $5.00 [approx]";

    c.bench_function("plain_regex", |b| {
        b.iter(|| black_box(compile_pattern(black_box(input), ModeFlags::EXACT)))
    });
}

fn bench_wildcard_nocase(c: &mut Criterion) {
    let input = "*.Backup?-Archive*";

    c.bench_function("wildcard_nocase", |b| {
        b.iter(|| {
            black_box(compile_pattern(
                black_box(input),
                ModeFlags::WILDCARD | ModeFlags::NOCASE,
            ))
        })
    });
}

fn bench_pcre_list(c: &mut Criterion) {
    let input = "table, chair, couch, lamp, rug, shelf, desk, stool";

    c.bench_function("pcre_list", |b| {
        b.iter(|| {
            black_box(compile_pattern(
                black_box(input),
                ModeFlags::PCRE | ModeFlags::LIST | ModeFlags::WORD,
            ))
        })
    });
}

fn bench_replace(c: &mut Criterion) {
    let input = r"\1 & \2 & everything in between \\ and more & more";

    c.bench_function("replace_literal", |b| {
        b.iter(|| black_box(compile_pattern(black_box(input), ModeFlags::REPLACE)))
    });
}

criterion_group!(
    benches,
    bench_plain_regex,
    bench_wildcard_nocase,
    bench_pcre_list,
    bench_replace,
);

criterion_main!(benches);
