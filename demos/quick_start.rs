//! # Pagesift - Quick Start Example
//!
//! Demonstrates the extraction core on a small inline page, no network or
//! API keys needed.
//!
//! Run with: `cargo run --example quick-start`

use pagesift::extraction::ContentExtractor;

fn main() {
    let html = r#"
        <body>
            <nav><a href="/home">Home</a></nav>
            <h1>Community Picnic</h1>
            <p>Join us on Saturday at the lake.</p>
            <h2>What to bring</h2>
            <ul>
                <li>A dish to share</li>
                <li>Sunscreen</li>
            </ul>
            <footer>
                <p>Copyright 2026</p>
            </footer>
            <a href="https://instagram.com/picnic">Follow us</a>
        </body>
    "#;

    let content = ContentExtractor::extract(html);

    println!("Blocks: {}", content.block_count);
    println!("Social links: {}", content.social_links.len());
    println!();
    println!("{}", content.text);
}
