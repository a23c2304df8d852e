use std::collections::HashSet;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_typist::core::testing::{RecordingView, ScriptedKeyboard};
use tui_typist::core::{
    compute_speed, ManualClock, MemoryLessonSource, MemoryStore, Pacing, ProgressionController,
    SentenceEvaluator,
};
use tui_typist::types::{BestSpeedPolicy, KeyInput, Lesson};

const SENTENCE: &str = "the quick brown fox jumps over the lazy dog";

fn bench_compute_speed(c: &mut Criterion) {
    let typed = SENTENCE.repeat(20);

    c.bench_function("compute_speed_860_chars", |b| {
        b.iter(|| compute_speed(black_box(&typed), black_box(Duration::from_secs(90))))
    });
}

fn bench_evaluate_sentence(c: &mut Criterion) {
    let keys: Vec<KeyInput> = SENTENCE.chars().map(KeyInput::from_char).collect();

    c.bench_function("evaluate_sentence", |b| {
        b.iter(|| {
            let mut eval = SentenceEvaluator::new(SENTENCE);
            for key in &keys {
                black_box(eval.feed(*key));
            }
            eval.feed(KeyInput::Enter)
        })
    });
}

fn bench_lesson_run(c: &mut Criterion) {
    let sentences: Vec<String> = (0..10).map(|_| SENTENCE.to_string()).collect();
    let source = MemoryLessonSource::new(vec![Lesson::new("lesson1", sentences)]);
    let script = format!("{}\r", SENTENCE).repeat(10);
    let controller =
        ProgressionController::new(ManualClock::new(), Pacing::none(), BestSpeedPolicy::Latest);

    c.bench_function("run_ten_sentence_lesson", |b| {
        b.iter(|| {
            let mut store = MemoryStore::new();
            let mut keyboard = ScriptedKeyboard::from_str(&script);
            let mut view = RecordingView::new();
            controller
                .run_all(&source, &HashSet::new(), &mut store, &mut keyboard, &mut view)
                .ok()
        })
    });
}

criterion_group!(
    benches,
    bench_compute_speed,
    bench_evaluate_sentence,
    bench_lesson_run
);
criterion_main!(benches);
