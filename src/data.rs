/// Customer quote shown in the testimonial carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub initials: &'static str,
}

/// Person a "recent download" toast can be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationCandidate {
    pub name: &'static str,
    pub location: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Jean D.",
        location: "Côte d'Ivoire",
        role: "E-commerçant",
        text: "Je pensais que Facebook me volait. Après avoir lu le chapitre sur les 'Clients Oiseaux', j'ai compris. Mon taux de livraison est passé de 30% à 75%.",
        initials: "JD",
    },
    Testimonial {
        name: "Sarah K.",
        location: "Sénégal",
        role: "Marque Cosmétique",
        text: "Le concept CBO + Broad a tout changé. Je passais ma vie à couper des adsets, maintenant je laisse l'IA bosser pour moi.",
        initials: "SK",
    },
    Testimonial {
        name: "Marc A.",
        location: "Cameroun",
        role: "Dropshipper",
        text: "Le manuel est brutal mais vrai. Le chapitre sur la 'Fatigue Publicitaire' m'a ouvert les yeux. Momentum Media connaît vraiment le marché.",
        initials: "MA",
    },
    Testimonial {
        name: "Paul T.",
        location: "Bénin",
        role: "Vendeur en ligne",
        text: "J'étais sur le point d'abandonner. Ce guide m'a montré comment arrêter de perdre de l'argent bêtement avec des pubs mal ciblées.",
        initials: "PT",
    },
    Testimonial {
        name: "Amina M.",
        location: "Mali",
        role: "Boutique Mode",
        text: "Merci pour l'astuce de nettoyage du pixel. Je n'ai plus de touristes qui commandent pour rien. Mes ventes sont enfin réelles.",
        initials: "AM",
    },
];

pub const NOTIFICATION_CANDIDATES: [NotificationCandidate; 8] = [
    NotificationCandidate { name: "Jean D.", location: "Côte d'Ivoire" },
    NotificationCandidate { name: "Sarah K.", location: "Sénégal" },
    NotificationCandidate { name: "Marc A.", location: "Cameroun" },
    NotificationCandidate { name: "Amina M.", location: "Mali" },
    NotificationCandidate { name: "Paul T.", location: "Bénin" },
    NotificationCandidate { name: "Fatou S.", location: "Burkina Faso" },
    NotificationCandidate { name: "Ibrahim K.", location: "Niger" },
    NotificationCandidate { name: "Aïcha B.", location: "Togo" },
];

pub const TIME_AGO: [&str; 4] = ["Il y a 2 min", "Il y a 5 min", "Il y a 8 min", "Il y a 12 min"];
