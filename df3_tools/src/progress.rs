use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over layers, hidden in silent mode
pub fn layer_bar(total: usize, silent: bool) -> ProgressBar {
    if silent {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("Processing data [{bar:40}] {pos}/{len} layers ({percent}%)")
            .progress_chars("=> "),
    );
    bar
}

/// Observer for `df3_lib` operations driving `bar`
pub fn bar_observer(bar: &ProgressBar) -> impl FnMut(usize, usize) + '_ {
    move |done, total| {
        bar.set_length(total as u64);
        bar.set_position(done as u64);
    }
}
