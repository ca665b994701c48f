//! Basic Message Chunking
//!
//! Split a long bot answer into chat-sized messages.
//!
//! ```bash
//! cargo run --example basic_chunking
//! ```

use fenced::{chunk, ChunkConfig, ChunkMode, TextAnalyzer};

fn main() {
    let mut answer = String::from("To link a project, run the command below in your channel.\n\n");
    answer.push_str("```sh\n/project link 42\n/project status\n```\n\n");
    for i in 1..=12 {
        answer.push_str(&format!(
            "Step {i}: the bot checks the pipeline, posts a summary and waits for the next event. \
             Nothing else happens until the runner reports back.\n\n"
        ));
    }

    let analysis = TextAnalyzer::default().analyze(&answer);
    println!("Answer: {} chars", answer.chars().count());
    println!("Features: {:?}\n", analysis.features);

    // Cutting blindly breaks the code block as soon as it crosses a cut
    let blind = chunk(&answer, 300);
    println!("Fixed width: {} messages", blind.len());

    let config = ChunkConfig::new(ChunkMode::Smart)
        .with_sizes(250, 300)
        .expect("valid sizes");
    let response = config.respond(&answer);

    println!("Smart: {} messages\n", response.chunk_count());
    for segment in &response.segments {
        let preview = segment.content.chars().take(50).collect::<String>();
        println!("{segment}: {preview:?}");
    }
}
