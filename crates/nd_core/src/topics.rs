/// The browsable topic catalog, in display order.
pub const TOPICS: [&str; 40] = [
    "Technology",
    "Business",
    "Sports",
    "Entertainment",
    "Health",
    "Science",
    "Politics",
    "World",
    "Environment",
    "Education",
    "Food",
    "Travel",
    "Fashion",
    "Art",
    "Economy",
    "Crime",
    "Weather",
    "Space",
    "Gaming",
    "Music",
    "Movies",
    "Books",
    "Fitness",
    "Automotive",
    "Real Estate",
    "Energy",
    "Agriculture",
    "Transportation",
    "Media",
    "Religion",
    "History",
    "Culture",
    "Social Media",
    "Innovation",
    "Startups",
    "Finance",
    "Markets",
    "Cryptocurrency",
    "AI",
    "Robotics",
];
