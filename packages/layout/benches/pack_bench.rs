use biolink_blocks::{create_block, IdGenerator, SizePreset};
use biolink_layout::pack_rows;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn typical_page(c: &mut Criterion) {
    let mut ids = IdGenerator::new("@bench");
    let mut blocks = vec![create_block("profile", &mut ids).unwrap()];
    for i in 0..12 {
        let kind = if i % 3 == 0 { "link" } else { "button" };
        let mut block = create_block(kind, &mut ids).unwrap();
        if i % 2 == 0 {
            block = block.with_size(SizePreset::HalfMedium);
        }
        blocks.push(block);
    }

    c.bench_function("pack_typical_page", |b| {
        b.iter(|| pack_rows(black_box(&blocks)))
    });
}

fn long_page(c: &mut Criterion) {
    let mut ids = IdGenerator::new("@bench");
    let mut blocks = vec![create_block("profile", &mut ids).unwrap()];
    for i in 0..500 {
        let mut block = create_block("link", &mut ids).unwrap();
        if i % 2 == 0 {
            block = block.with_size(SizePreset::HalfSmall);
        }
        blocks.push(block);
    }

    c.bench_function("pack_long_page", |b| {
        b.iter(|| pack_rows(black_box(&blocks)))
    });
}

criterion_group!(benches, typical_page, long_page);
criterion_main!(benches);
