use criterion::{black_box, criterion_group, criterion_main, Criterion};
use df3_lib::{encode_images, encode_layers, test_helpers, LayerFormat, NoProgress, Volume};

const WIDTH: u32 = 256;
const HEIGHT: u32 = 256;
const DEPTH: u32 = 64;

fn encode_stack(c: &mut Criterion) {
    let layers = test_helpers::gradient_stack(WIDTH, HEIGHT, DEPTH);

    c.bench_function("encode 256x256x64", |b| {
        b.iter(|| encode_images(black_box(layers.clone()), &mut NoProgress).unwrap())
    });
}

fn decode_volume(c: &mut Criterion) {
    let layers = test_helpers::gradient_stack(WIDTH, HEIGHT, DEPTH);
    let bytes = encode_images(layers, &mut NoProgress).unwrap().to_bytes();

    c.bench_function("decode 256x256x64", |b| {
        b.iter(|| {
            let volume = Volume::from_vec(black_box(bytes.clone())).unwrap();
            volume.layers().count()
        })
    });

    let wide: Vec<u8> = bytes[6..].iter().flat_map(|&v| [v, 0]).collect();
    let wide = test_helpers::df3_bytes(WIDTH as u16, HEIGHT as u16, DEPTH as u16, &wide);

    c.bench_function("decode 16bit 256x256x64", |b| {
        b.iter(|| {
            let volume = Volume::from_vec(black_box(wide.clone())).unwrap();
            volume.layers().count()
        })
    });
}

fn export_layers(c: &mut Criterion) {
    let layers = test_helpers::gradient_stack(WIDTH, HEIGHT, 8);
    let volume = encode_images(layers, &mut NoProgress).unwrap();

    c.bench_function("export tga 256x256x8", |b| {
        b.iter(|| encode_layers(&volume, LayerFormat::Tga, &mut NoProgress).unwrap())
    });

    c.bench_function("export png 256x256x8", |b| {
        b.iter(|| encode_layers(&volume, LayerFormat::Png, &mut NoProgress).unwrap())
    });
}

criterion_group! {
    name = codec;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = encode_stack, decode_volume, export_layers
}

criterion_main!(codec);
