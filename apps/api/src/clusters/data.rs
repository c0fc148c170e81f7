//! Built-in career cluster table, used when no cluster map file is configured.
//! Rows: (label_code, title_label, cluster_code, cluster_label).

pub const CAREER_CLUSTERS: &[(&str, &str, &str, &str)] = &[
    ("tailor", "Tailor", "skilled_trades", "Skilled Trades & Vocational"),
    ("pharmacist", "Pharmacist", "healthcare", "Healthcare & Medicine"),
    ("hotel_manager", "Hotel Manager", "hospitality", "Hospitality & Tourism"),
    ("police_officer", "Police Officer", "law_public", "Law, Civil & Public Services"),
    ("electrician", "Electrician", "skilled_trades", "Skilled Trades & Vocational"),
    ("data_scientist", "Data Scientist", "it_ai", "Information Technology & AI"),
    ("nurse", "Nurse", "healthcare", "Healthcare & Medicine"),
    ("content_writer", "Content Writer", "arts_media", "Arts, Design & Media"),
    ("cybersecurity_analyst", "Cybersecurity Analyst", "it_ai", "Information Technology & AI"),
    ("college_professor", "College Professor", "education", "Education & Training"),
    ("organic_farmer", "Organic Farmer", "agriculture", "Agriculture & Environment"),
    ("graphic_designer", "Graphic Designer", "arts_media", "Arts, Design & Media"),
    ("journalist", "Journalist", "arts_media", "Arts, Design & Media"),
    ("marketing_executive", "Marketing Executive", "business", "Business, Management & Finance"),
    ("photographer", "Photographer", "arts_media", "Arts, Design & Media"),
    ("hr_manager", "HR Manager", "business", "Business, Management & Finance"),
    ("tutor", "Tutor / Coaching Instructor", "education", "Education & Training"),
    ("financial_analyst", "Financial Analyst", "business", "Business, Management & Finance"),
    ("mechanic", "Mechanic", "skilled_trades", "Skilled Trades & Vocational"),
    ("civil_engineer", "Civil Engineer", "engineering", "Engineering & Technology"),
    ("mechanical_engineer", "Mechanical Engineer", "engineering", "Engineering & Technology"),
    ("data_analyst", "Data Analyst", "it_ai", "Information Technology & AI"),
    ("chef", "Chef", "hospitality", "Hospitality & Tourism"),
    ("ias_officer", "IAS/IPS Officer", "law_public", "Law, Civil & Public Services"),
    ("fitness_trainer", "Fitness Trainer", "sports_defence", "Sports, Fitness & Defence"),
    ("army_personnel", "Army / Defence Personnel", "sports_defence", "Sports, Fitness & Defence"),
    ("electrical_engineer", "Electrical Engineer", "engineering", "Engineering & Technology"),
    ("tour_guide", "Tour Guide", "hospitality", "Hospitality & Tourism"),
    ("pu_lecturer", "PU Lecturer", "education", "Education & Training"),
    ("physiotherapist", "Physiotherapist", "healthcare", "Healthcare & Medicine"),
    ("mobile_app_developer", "Mobile App Developer", "it_ai", "Information Technology & AI"),
    ("freelancer", "Freelancer / Consultant", "entrepreneurship", "Entrepreneurship & Startups"),
    ("social_worker", "Social Worker", "law_public", "Law, Civil & Public Services"),
    ("horticulturist", "Horticulturist", "agriculture", "Agriculture & Environment"),
    ("software_engineer", "Software Engineer", "engineering", "Engineering & Technology"),
    ("chartered_accountant", "Chartered Accountant", "business", "Business, Management & Finance"),
    ("startup_founder", "Startup Founder", "entrepreneurship", "Entrepreneurship & Startups"),
    ("embedded_engineer", "Embedded Systems Engineer", "engineering", "Engineering & Technology"),
    ("sports_coach", "Sports Coach", "sports_defence", "Sports, Fitness & Defence"),
    ("lab_technician", "Lab Technician", "healthcare", "Healthcare & Medicine"),
    ("school_teacher", "School Teacher", "education", "Education & Training"),
    ("doctor_mbbs", "Doctor (MBBS)", "healthcare", "Healthcare & Medicine"),
    ("lawyer", "Lawyer / Advocate", "law_public", "Law, Civil & Public Services"),
    ("ml_engineer", "Machine Learning Engineer", "it_ai", "Information Technology & AI"),
    ("carpenter", "Carpenter", "skilled_trades", "Skilled Trades & Vocational"),
    ("video_editor", "Video Producer / Editor", "arts_media", "Arts, Design & Media"),
    ("agricultural_scientist", "Agricultural Scientist", "agriculture", "Agriculture & Environment"),
];
