//! Authored demo catalog.
//!
//! Data-authoring lives here: ids are hand-assigned and stable. The CLI demo
//! and scenario tests build their stores from these records.

use crate::model::entry::{BlogPost, Project};

/// Returns the authored project records in display order.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "E-Commerce Website".to_string(),
            description: "Fully responsive e-commerce platform with modern features.".to_string(),
            tags: tags(&["React", "Node.js", "MongoDB", "Stripe"]),
            icon: "fas fa-shopping-cart".to_string(),
            image: None,
            featured: true,
        },
        Project {
            id: 2,
            title: "Task Management App".to_string(),
            description: "Productivity app with drag-and-drop functionality.".to_string(),
            tags: tags(&["Vue.js", "Firebase", "SCSS", "PWA"]),
            icon: "fas fa-tasks".to_string(),
            image: Some("images/task-app.jpeg".to_string()),
            featured: true,
        },
        Project {
            id: 3,
            title: "Weather Dashboard".to_string(),
            description: "Beautiful weather app with interactive charts.".to_string(),
            tags: tags(&["JavaScript", "API Integration", "Chart.js"]),
            icon: "fas fa-cloud-sun".to_string(),
            image: None,
            featured: false,
        },
        Project {
            id: 4,
            title: "Portfolio Website".to_string(),
            description: "Modern portfolio with dark mode and animations.".to_string(),
            tags: tags(&["HTML5", "CSS3", "JavaScript", "GSAP"]),
            icon: "fas fa-laptop-code".to_string(),
            image: None,
            featured: false,
        },
        Project {
            id: 5,
            title: "Social Media Dashboard".to_string(),
            description: "Analytics dashboard with data visualization.".to_string(),
            tags: tags(&["React", "D3.js", "Express", "MySQL"]),
            icon: "fas fa-chart-line".to_string(),
            image: None,
            featured: true,
        },
        Project {
            id: 6,
            title: "Fitness Tracker".to_string(),
            description: "Mobile app for tracking workouts and nutrition.".to_string(),
            tags: tags(&["React Native", "Redux", "Firebase"]),
            icon: "fas fa-dumbbell".to_string(),
            image: None,
            featured: false,
        },
    ]
}

/// Returns the authored blog post records in display order.
pub fn sample_blogs() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Understanding React Hooks".to_string(),
            excerpt: "Dive deep into React Hooks and learn how to use them effectively in your projects.".to_string(),
            content: "\
<h2>Introduction to React Hooks</h2>\n\
<p>React Hooks let you use state and other React features without writing a class. This guide walks through the built-in hooks and how to compose your own.</p>\n\
<h3>Basic Hooks</h3>\n\
<p>The <code>useState</code> hook adds state to function components:</p>\n\
<pre><code>const [count, setCount] = useState(0);</code></pre>\n\
<p>The <code>useEffect</code> hook handles side effects after render.</p>\n\
<h3>Custom Hooks</h3>\n\
<p>Custom hooks extract component logic into reusable functions, keeping components small and focused.</p>"
                .to_string(),
            image: Some("images/blog-1.jpg".to_string()),
            author: "John Carter".to_string(),
            date: "2023-06-15".to_string(),
            read_time: "8 min read".to_string(),
            tags: tags(&["React", "JavaScript", "Hooks", "Frontend"]),
            category: "React".to_string(),
            featured: true,
        },
        BlogPost {
            id: 2,
            title: "Design Systems for Developers".to_string(),
            excerpt: "Learn how to create and implement design systems that improve consistency and efficiency.".to_string(),
            content: "\
<h2>Building Scalable Design Systems</h2>\n\
<p>A design system is a collection of reusable components, guided by clear standards, that can be assembled to build any number of applications.</p>\n\
<h3>Design Tokens</h3>\n\
<p>Tokens are named entities that store visual design attributes such as color and spacing scales.</p>\n\
<h3>Benefits for Developers</h3>\n\
<ul><li>Faster development through reuse</li><li>Visual consistency</li><li>Centralized maintenance</li></ul>"
                .to_string(),
            image: Some("images/blog-2.jpg".to_string()),
            author: "John Carter".to_string(),
            date: "2023-05-28".to_string(),
            read_time: "10 min read".to_string(),
            tags: tags(&["Design Systems", "UI/UX", "CSS", "Figma"]),
            category: "Design".to_string(),
            featured: true,
        },
        BlogPost {
            id: 3,
            title: "Mobile-First Approach in 2023".to_string(),
            excerpt: "Explore why mobile-first design is more important than ever and how to implement it.".to_string(),
            content: "\
<h2>The Mobile-First Revolution</h2>\n\
<p>With mobile devices driving most web traffic, starting from the smallest screen and progressively enhancing upward is a business necessity, not a preference.</p>\n\
<h3>Implementation</h3>\n\
<p>Write base styles for small screens first, then layer tablet and desktop refinements behind <code>min-width</code> media queries.</p>"
                .to_string(),
            image: Some("images/blog-3.jpg".to_string()),
            author: "John Carter".to_string(),
            date: "2023-04-10".to_string(),
            read_time: "12 min read".to_string(),
            tags: tags(&["Mobile First", "Responsive Design", "PWA", "Performance"]),
            category: "Mobile".to_string(),
            featured: false,
        },
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
