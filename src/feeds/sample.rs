//! Bundled sample feed data

use super::{FeedProvider, Paper, TrendingModel, TrendingRepo};

/// Feed provider backed by fixed sample data
#[derive(Debug, Clone, Default)]
pub struct StaticFeeds;

impl StaticFeeds {
    pub fn new() -> Self {
        Self
    }
}

fn model(model_id: &str, downloads: u64, stars: u64) -> TrendingModel {
    TrendingModel {
        model_id: model_id.to_string(),
        url: format!("https://huggingface.co/{}", model_id),
        downloads,
        stars,
    }
}

fn repo(name: &str, description: &str, stars: u64) -> TrendingRepo {
    TrendingRepo {
        name: name.to_string(),
        description: description.to_string(),
        stars,
    }
}

fn paper(title: &str, authors: &str, conference: &str, link: &str, date: &str) -> Paper {
    Paper {
        title: title.to_string(),
        authors: authors.to_string(),
        conference: conference.to_string(),
        link: link.to_string(),
        date: date.to_string(),
    }
}

impl FeedProvider for StaticFeeds {
    fn trending_models(&self) -> Vec<TrendingModel> {
        vec![
            model("meta-llama/Llama-3-70B-Instruct", 1_250_000, 4_520),
            model("anthropic/claude-3-sonnet", 980_000, 3_850),
            model("mistralai/Mistral-7B-v2", 830_000, 3_200),
            model("openchat/openchat-3.7", 720_000, 2_950),
            model("stabilityai/stable-diffusion-3", 650_000, 2_780),
        ]
    }

    fn trending_repos(&self) -> Vec<TrendingRepo> {
        vec![
            repo(
                "microsoft/promptflow",
                "Build high-quality LLM apps - from prototyping, testing to production deployment and monitoring.",
                15_200,
            ),
            repo(
                "vercel/ai-toolkit",
                "Open source tools for building AI applications with React and JavaScript.",
                12_800,
            ),
            repo("deepseek-ai/DeepSeek-Coder", "DeepSeek Coder: Let the Code Write Itself", 9_700),
            repo("anthropic/claude-sdk", "Official SDK for building with Claude models", 7_500),
            repo(
                "lllyasviel/stable-diffusion-webui-directml",
                "DirectML backend for Stable Diffusion web UI",
                6_200,
            ),
        ]
    }

    fn papers(&self) -> Vec<Paper> {
        vec![
            paper(
                "LLM-Based Reasoning for Code Generation: A Comprehensive Survey",
                "Chen et al.",
                "ICML 2025",
                "https://arxiv.org/abs/2405.12345",
                "April 2025",
            ),
            paper(
                "Adaptive Multimodal Models for Real-Time UI Generation",
                "Park, Johnson & Zhang",
                "CHI 2025",
                "https://arxiv.org/abs/2404.54321",
                "March 2025",
            ),
            paper(
                "Self-Evolving Neural Architectures for Visual Design Synthesis",
                "Wong & Patel",
                "CVPR 2025",
                "https://arxiv.org/abs/2403.98765",
                "March 2025",
            ),
        ]
    }
}
