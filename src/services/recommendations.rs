use crate::{
    models::{MoodCategory, Recommendation},
    services::mood,
};

const HAPPY: &[Recommendation] = &[
    Recommendation::new(
        "Calvin and Hobbes",
        "A lighthearted comic about a boy and his stuffed tiger that comes to life in his imagination.",
        "https://placeholder.pics/svg/300x200/FFD700/000000/Calvin%20and%20Hobbes",
    ),
    Recommendation::new(
        "Asterix and Obelix",
        "Fun adventures of Gaulish warriors resisting Roman occupation.",
        "https://placeholder.pics/svg/300x200/FF9F00/000000/Asterix",
    ),
];

const SAD: &[Recommendation] = &[
    Recommendation::new(
        "Maus",
        "A poignant graphic novel about the Holocaust that helps process complex emotions.",
        "https://placeholder.pics/svg/300x200/A9A9A9/FFFFFF/Maus",
    ),
    Recommendation::new(
        "Blankets",
        "A coming-of-age memoir about first love and faith that resonates with melancholy.",
        "https://placeholder.pics/svg/300x200/87CEEB/000000/Blankets",
    ),
];

const ANGRY: &[Recommendation] = &[
    Recommendation::new(
        "Watchmen",
        "A dark superhero story that explores complex moral themes and human nature.",
        "https://placeholder.pics/svg/300x200/DC143C/FFFFFF/Watchmen",
    ),
    Recommendation::new(
        "V for Vendetta",
        "A politically charged graphic novel about resistance against totalitarianism.",
        "https://placeholder.pics/svg/300x200/8B0000/FFFFFF/V%20for%20Vendetta",
    ),
];

const NEUTRAL: &[Recommendation] = &[
    Recommendation::new(
        "Saga",
        "An epic space fantasy that blends various genres with rich storytelling.",
        "https://placeholder.pics/svg/300x200/708090/FFFFFF/Saga",
    ),
    Recommendation::new(
        "The Sandman",
        "A fantasy series exploring mythology, history and human nature.",
        "https://placeholder.pics/svg/300x200/483D8B/FFFFFF/Sandman",
    ),
];

const SURPRISE: &[Recommendation] = &[
    Recommendation::new(
        "Preacher",
        "A supernatural, bizarre adventure with unexpected twists and turns.",
        "https://placeholder.pics/svg/300x200/9932CC/FFFFFF/Preacher",
    ),
    Recommendation::new(
        "Hellboy",
        "Paranormal adventures with surprising plots and creative monsters.",
        "https://placeholder.pics/svg/300x200/8A2BE2/FFFFFF/Hellboy",
    ),
];

const FEAR: &[Recommendation] = &[
    Recommendation::new(
        "Uzumaki",
        "A horror manga that creates an atmosphere of creeping dread.",
        "https://placeholder.pics/svg/300x200/000000/FFFFFF/Uzumaki",
    ),
    Recommendation::new(
        "Walking Dead",
        "A zombie apocalypse series focusing on human survival.",
        "https://placeholder.pics/svg/300x200/2F4F4F/FFFFFF/Walking%20Dead",
    ),
];

const DISGUST: &[Recommendation] = &[
    Recommendation::new(
        "Crossed",
        "A post-apocalyptic horror comic with shocking and grotesque elements.",
        "https://placeholder.pics/svg/300x200/006400/FFFFFF/Crossed",
    ),
    Recommendation::new(
        "Johnny the Homicidal Maniac",
        "A dark comedy with grotesque themes examining society.",
        "https://placeholder.pics/svg/300x200/191970/FFFFFF/JTHM",
    ),
];

/// Returns the comics recommended for a mood category
///
/// The list keeps its authored order and is never empty. Since the match is
/// exhaustive, a new category cannot be added without giving it a list.
pub fn recommendations_for(category: MoodCategory) -> &'static [Recommendation] {
    match category {
        MoodCategory::Happy => HAPPY,
        MoodCategory::Sad => SAD,
        MoodCategory::Angry => ANGRY,
        MoodCategory::Neutral => NEUTRAL,
        MoodCategory::Surprise => SURPRISE,
        MoodCategory::Fear => FEAR,
        MoodCategory::Disgust => DISGUST,
    }
}

/// Normalizes a raw mood label and returns its recommendations
///
/// Unrecognized labels get the neutral list.
pub fn recommend_for(raw_label: &str) -> &'static [Recommendation] {
    recommendations_for(mood::normalize(raw_label))
}
