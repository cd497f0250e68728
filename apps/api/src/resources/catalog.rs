use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Platform {
    EdX,
    Coursera,
}

/// A course in the built-in table. `tags` are the skills it covers.
#[derive(Debug)]
pub struct LearningResource {
    pub id: &'static str,
    pub title: &'static str,
    pub platform: Platform,
    pub url: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

macro_rules! resource {
    ($id:expr, $title:expr, $platform:ident, $url:expr, $desc:expr, [$($tag:expr),* $(,)?]) => {
        LearningResource {
            id: $id,
            title: $title,
            platform: Platform::$platform,
            url: $url,
            description: $desc,
            tags: &[$($tag),*],
        }
    };
}

pub const LEARNING_RESOURCES: &[LearningResource] = &[
    // Programming Languages: JavaScript
    resource!("js-intro-edx", "Introduction to JavaScript", EdX, "https://www.edx.org/learn/javascript",
        "Learn the fundamentals of JavaScript programming, including variables, functions, and DOM manipulation.",
        ["JavaScript", "Programming", "Web Development", "HTML", "CSS"]),
    resource!("js-coursera", "JavaScript for Beginners Specialization", Coursera, "https://www.coursera.org/specializations/javascript-beginner",
        "Master JavaScript from scratch. Learn modern JavaScript features and build real-world projects.",
        ["JavaScript", "Programming", "Web Development", "Frontend"]),

    // Programming Languages: Python
    resource!("python-intro-edx", "Introduction to Python Programming", EdX, "https://www.edx.org/learn/python",
        "Learn Python programming fundamentals, data structures, and object-oriented programming concepts.",
        ["Python", "Programming", "Data Structures", "Algorithms"]),
    resource!("python-coursera", "Python for Everybody Specialization", Coursera, "https://www.coursera.org/specializations/python",
        "Learn to program and analyze data with Python. Develop programs to gather, clean, analyze, and visualize data.",
        ["Python", "Programming", "Data Analysis", "Data Science"]),

    // Web Frameworks: React
    resource!("react-coursera", "React - The Complete Guide", Coursera, "https://www.coursera.org/learn/react-basics",
        "Master React.js for building modern, interactive user interfaces. Learn hooks, state management, and routing.",
        ["React", "JavaScript", "Frontend", "Web Development", "UI"]),
    resource!("react-edx", "Building Modern Web Applications with React", EdX, "https://www.edx.org/learn/react",
        "Learn to build scalable web applications using React, including component architecture and state management.",
        ["React", "JavaScript", "Frontend", "Web Development"]),

    // React Ecosystem: Redux
    resource!("redux-coursera", "Redux for React Applications", Coursera, "https://www.coursera.org/learn/redux",
        "Master Redux state management for React applications. Learn actions, reducers, and middleware.",
        ["Redux", "React", "State Management", "JavaScript", "Frontend"]),
    resource!("redux-edx", "State Management with Redux", EdX, "https://www.edx.org/learn/redux",
        "Learn Redux for managing complex application state in React applications.",
        ["Redux", "React", "State Management", "JavaScript"]),

    // Build Tools: Webpack
    resource!("webpack-coursera", "Webpack and Modern JavaScript Build Tools", Coursera, "https://www.coursera.org/learn/webpack",
        "Master Webpack for bundling JavaScript applications. Learn code splitting, optimization, and plugins.",
        ["Webpack", "Build Tools", "JavaScript", "React", "Frontend"]),
    resource!("webpack-edx", "Introduction to Webpack", EdX, "https://www.edx.org/learn/webpack",
        "Learn Webpack module bundler for modern JavaScript applications.",
        ["Webpack", "Build Tools", "JavaScript", "React"]),

    // HTML and CSS
    resource!("html-css-coursera", "HTML, CSS, and Javascript for Web Developers", Coursera, "https://www.coursera.org/learn/html-css-javascript-for-web-developers",
        "Learn HTML and CSS fundamentals for building responsive web pages.",
        ["HTML", "CSS", "Web Development", "Frontend"]),
    resource!("html-css-edx", "Introduction to HTML and CSS", EdX, "https://www.edx.org/learn/html-css",
        "Master HTML and CSS for creating beautiful and responsive web pages.",
        ["HTML", "CSS", "Web Development", "Frontend"]),

    // Web Frameworks: Node.js
    resource!("nodejs-coursera", "Server-Side Development with NodeJS", Coursera, "https://www.coursera.org/learn/server-side-nodejs",
        "Build scalable backend applications with Node.js, Express, and MongoDB. Learn REST APIs and authentication.",
        ["Node.js", "JavaScript", "Backend", "Express", "REST APIs", "MongoDB"]),
    resource!("nodejs-edx", "Introduction to Node.js", EdX, "https://www.edx.org/learn/nodejs",
        "Learn server-side JavaScript development with Node.js, including async programming and API development.",
        ["Node.js", "JavaScript", "Backend", "REST APIs"]),

    // Web Frameworks: Django
    resource!("django-edx", "Django for Everybody", EdX, "https://www.edx.org/learn/django",
        "Learn Django web framework for Python. Build database-driven web applications with Django's ORM.",
        ["Django", "Python", "Web Development", "Backend", "SQL", "PostgreSQL"]),

    // Databases: SQL
    resource!("sql-coursera", "SQL for Data Science", Coursera, "https://www.coursera.org/learn/sql-for-data-science",
        "Learn SQL fundamentals for data analysis. Query databases, join tables, and analyze data efficiently.",
        ["SQL", "Databases", "Data Analysis", "MySQL", "PostgreSQL", "Data Science"]),
    resource!("sql-edx", "Introduction to Databases and SQL", EdX, "https://www.edx.org/learn/sql",
        "Master SQL for database management. Learn to design databases, write queries, and optimize performance.",
        ["SQL", "Databases", "MySQL", "PostgreSQL", "Database Design"]),

    // Databases: MongoDB
    resource!("mongodb-coursera", "MongoDB Basics", Coursera, "https://www.coursera.org/learn/introduction-mongodb",
        "Learn MongoDB NoSQL database fundamentals, including document modeling, queries, and aggregation.",
        ["MongoDB", "Databases", "NoSQL", "Backend", "Node.js"]),

    // Cloud and DevOps: AWS
    resource!("aws-coursera", "AWS Cloud Practitioner Essentials", Coursera, "https://www.coursera.org/learn/aws-cloud-practitioner-essentials",
        "Learn AWS cloud fundamentals, including EC2, S3, Lambda, and cloud architecture best practices.",
        ["AWS", "Cloud", "DevOps", "Cloud Architecture", "Infrastructure"]),
    resource!("aws-edx", "Introduction to Cloud Computing with AWS", EdX, "https://www.edx.org/learn/aws",
        "Master Amazon Web Services. Learn to deploy and manage applications on AWS cloud infrastructure.",
        ["AWS", "Cloud", "DevOps", "Cloud Architecture"]),

    // Cloud and DevOps: Docker
    resource!("docker-coursera", "Docker for Developers", Coursera, "https://www.coursera.org/learn/docker",
        "Learn containerization with Docker. Build, deploy, and manage containerized applications.",
        ["Docker", "DevOps", "Containers", "CI/CD", "Deployment"]),
    resource!("docker-edx", "Introduction to Docker and Containers", EdX, "https://www.edx.org/learn/docker",
        "Master Docker containerization. Learn to create, manage, and orchestrate containers for modern applications.",
        ["Docker", "DevOps", "Containers", "Kubernetes"]),

    // Cloud and DevOps: Kubernetes
    resource!("kubernetes-coursera", "Kubernetes: Deploy, Scale, and Manage", Coursera, "https://www.coursera.org/learn/kubernetes",
        "Learn Kubernetes orchestration. Deploy, scale, and manage containerized applications in production.",
        ["Kubernetes", "DevOps", "Containers", "Docker", "Cloud", "Deployment"]),

    // QA and Testing: Testing Fundamentals
    resource!("testing-coursera", "Software Testing and Automation Specialization", Coursera, "https://www.coursera.org/specializations/software-testing-automation",
        "Learn software testing fundamentals, test planning, and test case design.",
        ["Testing", "Test Planning", "Automation", "Software Testing"]),
    resource!("testing-edx", "Introduction to Software Testing", EdX, "https://www.edx.org/learn/software-testing",
        "Master the fundamentals of software testing and quality assurance.",
        ["Testing", "Test Planning", "Software Testing", "Quality Assurance"]),

    // QA and Testing: Automation
    resource!("automation-coursera", "Test Automation with Selenium", Coursera, "https://www.coursera.org/learn/test-automation",
        "Learn test automation frameworks and tools for automated testing.",
        ["Automation", "Selenium", "Testing", "Test Automation"]),
    resource!("automation-edx", "Test Automation Fundamentals", EdX, "https://www.edx.org/learn/test-automation",
        "Master test automation principles and practices.",
        ["Automation", "Testing", "Test Automation"]),

    // QA and Testing: Selenium
    resource!("selenium-coursera", "Selenium WebDriver with Python", Coursera, "https://www.coursera.org/learn/selenium",
        "Master Selenium WebDriver for automated web testing with Python.",
        ["Selenium", "Python", "Automation", "Testing", "Web Testing"]),
    resource!("selenium-edx", "Introduction to Selenium", EdX, "https://www.edx.org/learn/selenium",
        "Learn Selenium for automated browser testing and web application testing.",
        ["Selenium", "Automation", "Testing", "Web Testing"]),

    // QA and Testing: Bug Tracking
    resource!("bug-tracking-coursera", "Bug Tracking and Defect Management", Coursera, "https://www.coursera.org/learn/bug-tracking",
        "Learn bug tracking systems, defect lifecycle, and issue management.",
        ["Bug Tracking", "Test Planning", "Testing", "Quality Assurance"]),
    resource!("bug-tracking-edx", "Defect Management and Bug Tracking", EdX, "https://www.edx.org/learn/bug-tracking",
        "Master bug tracking tools and defect management processes.",
        ["Bug Tracking", "Testing", "Quality Assurance"]),

    // QA and Testing: Test Planning
    resource!("test-planning-coursera", "Test Planning and Strategy", Coursera, "https://www.coursera.org/learn/test-planning",
        "Learn comprehensive test planning, test strategy, and test case design.",
        ["Test Planning", "Testing", "Test Strategy", "Quality Assurance"]),
    resource!("test-planning-edx", "Test Planning and Design", EdX, "https://www.edx.org/learn/test-planning",
        "Master test planning methodologies and test design techniques.",
        ["Test Planning", "Testing", "Test Design"]),

    // Data Science: Statistics
    resource!("statistics-coursera", "Statistics with Python Specialization", Coursera, "https://www.coursera.org/specializations/statistics-with-python",
        "Learn statistical analysis with Python. Master hypothesis testing, regression, and data analysis.",
        ["Statistics", "Python", "Data Analysis", "Data Science"]),
    resource!("statistics-edx", "Introduction to Statistics", EdX, "https://www.edx.org/learn/statistics",
        "Master statistical concepts and methods for data analysis.",
        ["Statistics", "Data Analysis", "Data Science"]),

    // Data Science: Pandas
    resource!("pandas-coursera", "Data Manipulation with Pandas", Coursera, "https://www.coursera.org/learn/pandas",
        "Master Pandas for data manipulation, cleaning, and analysis in Python.",
        ["Pandas", "Python", "Data Analysis", "Data Science", "NumPy"]),
    resource!("pandas-edx", "Data Analysis with Pandas", EdX, "https://www.edx.org/learn/pandas",
        "Learn Pandas library for efficient data manipulation and analysis.",
        ["Pandas", "Python", "Data Analysis", "NumPy"]),

    // Data Science: NumPy
    resource!("numpy-coursera", "NumPy for Data Science", Coursera, "https://www.coursera.org/learn/numpy",
        "Master NumPy for numerical computing and array operations in Python.",
        ["NumPy", "Python", "Data Science", "Data Analysis"]),
    resource!("numpy-edx", "Introduction to NumPy", EdX, "https://www.edx.org/learn/numpy",
        "Learn NumPy fundamentals for scientific computing and data analysis.",
        ["NumPy", "Python", "Data Science"]),

    // Data Science: Data Visualization
    resource!("data-visualization-coursera", "Data Visualization Specialization", Coursera, "https://www.coursera.org/specializations/data-visualization",
        "Master data visualization techniques using Python, Matplotlib, and Seaborn.",
        ["Data Visualization", "Python", "Pandas", "Matplotlib", "Data Science"]),
    resource!("data-visualization-edx", "Data Visualization with Python", EdX, "https://www.edx.org/learn/data-visualization",
        "Learn to create compelling data visualizations using Python libraries.",
        ["Data Visualization", "Python", "Pandas", "Data Science"]),

    // TypeScript
    resource!("typescript-coursera", "TypeScript for JavaScript Developers", Coursera, "https://www.coursera.org/learn/typescript",
        "Learn TypeScript to build type-safe JavaScript applications. Master advanced TypeScript features.",
        ["TypeScript", "JavaScript", "Programming", "Web Development", "Frontend"]),

    // Java
    resource!("java-coursera", "Java Programming Specialization", Coursera, "https://www.coursera.org/specializations/java-programming",
        "Master Java programming, object-oriented design, and data structures. Build enterprise applications.",
        ["Java", "Programming", "Object-Oriented Programming", "Spring Boot", "Backend"]),
    resource!("java-edx", "Introduction to Java Programming", EdX, "https://www.edx.org/learn/java",
        "Learn Java fundamentals, including classes, objects, inheritance, and exception handling.",
        ["Java", "Programming", "Object-Oriented Programming"]),

    // Git and Version Control
    resource!("git-coursera", "Version Control with Git", Coursera, "https://www.coursera.org/learn/version-control-with-git",
        "Master Git version control. Learn branching, merging, and collaboration workflows with GitHub.",
        ["Git", "Version Control", "GitHub", "CI/CD", "Software Engineering"]),

    // Soft Skills: Leadership
    resource!("leadership-coursera", "Leading People and Teams Specialization", Coursera, "https://www.coursera.org/specializations/leading-teams",
        "Develop leadership skills, including team management, communication, and strategic thinking.",
        ["Leadership", "Communication", "Teamwork", "Management", "Soft Skills"]),
    resource!("leadership-edx", "Leadership and Team Management", EdX, "https://www.edx.org/learn/leadership",
        "Learn effective leadership strategies, team building, and organizational management principles.",
        ["Leadership", "Teamwork", "Management", "Communication", "Soft Skills"]),

    // Soft Skills: Project Management
    resource!("pm-coursera", "Google Project Management Certificate", Coursera, "https://www.coursera.org/professional-certificates/google-project-management",
        "Master project management fundamentals, including Agile, Scrum, and project planning methodologies.",
        ["Project Management", "Agile", "Scrum", "Kanban", "Communication", "Leadership"]),
    resource!("pm-edx", "Project Management Fundamentals", EdX, "https://www.edx.org/learn/project-management",
        "Learn project management principles, including planning, execution, and risk management.",
        ["Project Management", "Agile", "Scrum", "Communication"]),

    // Cybersecurity
    resource!("cybersecurity-coursera", "Cybersecurity Specialization", Coursera, "https://www.coursera.org/specializations/cybersecurity",
        "Learn cybersecurity fundamentals, including network security, cryptography, and ethical hacking.",
        ["Cybersecurity", "Network Security", "Cryptography", "Ethical Hacking", "Security"]),

    // UI/UX Design
    resource!("ux-coursera", "Google UX Design Certificate", Coursera, "https://www.coursera.org/professional-certificates/google-ux-design",
        "Master UX design principles, user research, wireframing, and prototyping. Build a professional portfolio.",
        ["UX Design", "UI Design", "User Research", "Wireframing", "Prototyping", "Figma", "Design"]),

    // REST APIs
    resource!("api-coursera", "APIs for Beginners", Coursera, "https://www.coursera.org/learn/apis",
        "Learn REST API design and development. Build and consume RESTful APIs with best practices.",
        ["REST APIs", "API Design", "Backend", "Node.js", "Python", "Express"]),

    // Data Structures and Algorithms
    resource!("dsa-coursera", "Data Structures and Algorithms Specialization", Coursera, "https://www.coursera.org/specializations/data-structures-algorithms",
        "Master data structures and algorithms. Learn to solve complex programming problems efficiently.",
        ["Data Structures", "Algorithms", "Programming", "Problem Solving", "Computer Science"]),
    resource!("dsa-edx", "Introduction to Algorithms", EdX, "https://www.edx.org/learn/algorithms",
        "Learn fundamental algorithms and data structures. Analyze algorithm complexity and efficiency.",
        ["Algorithms", "Data Structures", "Programming", "Computer Science"]),
];
